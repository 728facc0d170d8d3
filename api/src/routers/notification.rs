use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use app::persistence::notifications::{list_notifications, send_notification};
use app::state::AppState;
use models::params::notification::SendNotificationParams;
use models::schemas::notification::NotificationSchema;

use crate::extractor::{AdminUser, CurrentUser, Json, Path, Valid};
use crate::{ApiResponse, error::ApiError};

#[utoipa::path(
    post,
    path = "/notifications/send",
    tag = "notifications",
    request_body = SendNotificationParams,
    responses(
        (status = 201, description = "Stored and pushed to the user's room as new_notification"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "No such user"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn notifications_send_post(
    State(state): State<AppState>,
    _: AdminUser,
    Valid(Json(params)): Valid<Json<SendNotificationParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let notification = send_notification(&state, params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Notification sent successfully",
            Some(NotificationSchema::from(notification)),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/notifications/{user_id}",
    tag = "notifications",
    params(("user_id" = i32, Path, description = "Addressed user")),
    responses(
        (status = 200, description = "Notifications, newest first", body = [NotificationSchema]),
        (status = 403, description = "Only the user or an admin"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn notifications_user_get(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    caller.ensure_self_or_admin(user_id)?;
    let notifications = list_notifications(&state.conn, user_id).await?;
    Ok(Json(
        notifications
            .into_iter()
            .map(NotificationSchema::from)
            .collect::<Vec<_>>(),
    ))
}

pub fn create_notification_router() -> Router<AppState> {
    Router::new()
        .route("/send", post(notifications_send_post))
        .route("/{user_id}", get(notifications_user_get))
}
