use axum::http::StatusCode;
use sea_orm::DbErr;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("user is already registered for this tournament")]
    DuplicateRegistration,
    #[error("at least 2 approved teams are needed to generate matches, found {0}")]
    InsufficientTeams(usize),
    #[error("odd number of approved teams ({0}); add a team or handle a bye")]
    OddTeamCount(usize),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("access denied")]
    Forbidden,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("email is already in use")]
    EmailTaken,
    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: String, to: String },
    #[error(transparent)]
    Store(#[from] DbErr),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InsufficientTeams(_) | Self::OddTeamCount(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateRegistration | Self::EmailTaken | Self::InvalidTransition { .. } => {
                StatusCode::CONFLICT
            }
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn transition(from: impl ToString, to: impl ToString) -> Self {
        Self::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
