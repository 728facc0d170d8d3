use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use app::persistence::users::{get_user, login_user, signup};
use app::state::AppState;
use app::utils::encode_data;
use models::params::user::{LoginUserParams, SignupParams};
use models::schemas::user::{AuthUser, TokensSchema, UserSchema};
use tracing::info;

use crate::extractor::{CurrentUser, Json, Valid};
use crate::{ApiResponse, error::ApiError};

#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "auth",
    request_body = SignupParams,
    responses(
        (status = 201, description = "Athlete account created"),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already in use"),
    )
)]
pub async fn signup_post(
    State(state): State<AppState>,
    Valid(Json(params)): Valid<Json<SignupParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let user = signup(&state.conn, params).await?;
    info!(user_id = user.id, "Account created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Account created successfully",
            Some(UserSchema::from(user)),
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginUserParams,
    responses(
        (status = 200, description = "Signed access token and profile", body = TokensSchema),
        (status = 401, description = "Invalid email or password"),
    )
)]
pub async fn login_post(
    State(state): State<AppState>,
    Valid(Json(params)): Valid<Json<LoginUserParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let user = login_user(&state.conn, params).await?;
    let access_token = encode_data(&state.config, AuthUser::from(&user))?;

    Ok(Json(TokensSchema {
        access_token,
        user: UserSchema::from(user),
    }))
}

#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Profile of the caller", body = UserSchema),
        (status = 403, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn me_get(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let user = get_user(&state.conn, caller.id).await?;
    Ok(Json(UserSchema::from(user)))
}

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup_post))
        .route("/login", post(login_post))
        .route("/me", get(me_get))
}
