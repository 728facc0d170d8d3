use axum::{extract::FromRequestParts, http::request::Parts};

use app::error::AppError;
use models::schemas::user::{AuthSchema, AuthUser};

use crate::error::ApiError;

/// Any caller holding a valid access token.
pub struct CurrentUser(pub AuthUser);

/// A caller whose token carries the admin role.
pub struct AdminUser(pub AuthUser);

fn auth_user(parts: &Parts) -> Option<AuthUser> {
    parts
        .extensions
        .get::<AuthSchema>()
        .and_then(|auth| auth.user.clone())
}

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        auth_user(parts)
            .map(CurrentUser)
            .ok_or(ApiError::App(AppError::Forbidden))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        auth_user(parts)
            .filter(AuthUser::is_admin)
            .map(AdminUser)
            .ok_or(ApiError::App(AppError::Forbidden))
    }
}

impl CurrentUser {
    /// Resources owned by a user are open to that user and to admins.
    pub fn ensure_self_or_admin(&self, user_id: i32) -> Result<(), ApiError> {
        if self.0.is_self_or_admin(user_id) {
            Ok(())
        } else {
            Err(ApiError::App(AppError::Forbidden))
        }
    }
}
