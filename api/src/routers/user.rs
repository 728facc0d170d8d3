use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};

use app::persistence::users::{
    change_password, create_user_as_admin, delete_user, get_user, list_users, update_user,
};
use app::state::AppState;
use models::params::user::{ChangePasswordParams, CreateUserParams, UpdateUserParams};
use models::schemas::user::UserSchema;

use crate::extractor::{AdminUser, CurrentUser, Json, Path, Valid};
use crate::{ApiResponse, error::ApiError};

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All accounts, newest first", body = [UserSchema]),
        (status = 403, description = "Admin only"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn users_get(
    State(state): State<AppState>,
    _: AdminUser,
) -> Result<impl IntoResponse, ApiError> {
    let users = list_users(&state.conn).await?;
    Ok(Json(
        users.into_iter().map(UserSchema::from).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserParams,
    responses(
        (status = 201, description = "Account created with the given role"),
        (status = 403, description = "Admin only"),
        (status = 409, description = "Email already in use"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn users_post(
    State(state): State<AppState>,
    _: AdminUser,
    Valid(Json(params)): Valid<Json<CreateUserParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let user = create_user_as_admin(&state.conn, params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "User created successfully",
            Some(UserSchema::from(user)),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The account", body = UserSchema),
        (status = 403, description = "Only the user or an admin"),
        (status = 404, description = "No such user"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn users_id_get(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    caller.ensure_self_or_admin(id)?;
    let user = get_user(&state.conn, id).await?;
    Ok(Json(UserSchema::from(user)))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserParams,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 403, description = "Not the user, or a role change by a non-admin"),
        (status = 404, description = "No such user"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn users_id_put(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(id): Path<i32>,
    Valid(Json(params)): Valid<Json<UpdateUserParams>>,
) -> Result<impl IntoResponse, ApiError> {
    caller.ensure_self_or_admin(id)?;
    let user = update_user(&state.conn, id, params, &caller.0).await?;

    Ok(Json(ApiResponse::success(
        "Profile updated successfully",
        Some(UserSchema::from(user)),
    )))
}

#[utoipa::path(
    put,
    path = "/users/{id}/password",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = ChangePasswordParams,
    responses(
        (status = 200, description = "Password changed"),
        (status = 401, description = "Current password does not match"),
        (status = 403, description = "Only the user or an admin"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn users_id_password_put(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(id): Path<i32>,
    Valid(Json(params)): Valid<Json<ChangePasswordParams>>,
) -> Result<impl IntoResponse, ApiError> {
    caller.ensure_self_or_admin(id)?;
    change_password(&state.conn, id, params).await?;
    Ok(Json(ApiResponse::message("Password changed successfully")))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Account and its registrations removed"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "No such user"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn users_id_delete(
    State(state): State<AppState>,
    _: AdminUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    delete_user(&state.conn, id).await?;
    Ok(Json(ApiResponse::message("User deleted successfully")))
}

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(users_get).post(users_post))
        .route(
            "/{id}",
            get(users_id_get).put(users_id_put).delete(users_id_delete),
        )
        .route("/{id}/password", put(users_id_password_put))
}
