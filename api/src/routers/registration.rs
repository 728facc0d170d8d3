use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::put,
};

use app::persistence::registrations::{register, set_registration_status};
use app::state::AppState;
use models::params::registration::{RegisterParams, UpdateRegistrationParams};
use models::schemas::registration::RegistrationSchema;

use crate::extractor::{AdminUser, CurrentUser, Json, Path, Valid};
use crate::{ApiResponse, error::ApiError};

#[utoipa::path(
    post,
    path = "/register",
    tag = "registrations",
    request_body = RegisterParams,
    responses(
        (status = 201, description = "Registration recorded as pending"),
        (status = 403, description = "Registering someone else without being admin"),
        (status = 404, description = "No such user or tournament"),
        (status = 409, description = "Already registered for this tournament"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn register_post(
    State(state): State<AppState>,
    caller: CurrentUser,
    Valid(Json(params)): Valid<Json<RegisterParams>>,
) -> Result<impl IntoResponse, ApiError> {
    caller.ensure_self_or_admin(params.user_id)?;
    let registration = register(&state.conn, params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Registration submitted successfully",
            Some(RegistrationSchema::from(registration)),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/registrations/{id}",
    tag = "registrations",
    params(("id" = i32, Path, description = "Registration id")),
    request_body = UpdateRegistrationParams,
    responses(
        (status = 200, description = "Registration approved or rejected"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "No such registration"),
        (status = 409, description = "Registration already decided"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn registrations_id_put(
    State(state): State<AppState>,
    _: AdminUser,
    Path(id): Path<i32>,
    Valid(Json(params)): Valid<Json<UpdateRegistrationParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let registration = set_registration_status(&state.conn, id, params.status).await?;

    Ok(Json(ApiResponse::success(
        "Registration updated successfully",
        Some(RegistrationSchema::from(registration)),
    )))
}

pub fn create_registration_router() -> Router<AppState> {
    Router::new().route("/{id}", put(registrations_id_put))
}
