use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use tracing::error;
use validator::ValidationErrors;

use app::error::AppError;

use crate::models::response::{ApiErrorResponse, ValidationErrorResponse};

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error type of every handler; renders as `{"message": ...}`.
#[derive(Debug)]
pub enum ApiError {
    App(AppError),
    Invalid(ValidationErrors),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => e.status_code(),
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::Invalid(errors) => {
                (status, Json(ValidationErrorResponse::from(errors))).into_response()
            }
            Self::App(e) if status.is_server_error() => {
                error!(error = ?e, "Request failed");
                let body = ApiErrorResponse {
                    message: INTERNAL_MESSAGE.to_string(),
                };
                (status, Json(body)).into_response()
            }
            Self::App(e) => {
                let body = ApiErrorResponse {
                    message: e.to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        Self::App(e)
    }
}

impl From<DbErr> for ApiError {
    fn from(e: DbErr) -> Self {
        Self::App(AppError::Store(e))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::App(AppError::Internal(e))
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        Self::Invalid(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::App(AppError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::App(AppError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::App(AppError::Validation(rejection.body_text()))
    }
}
