use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

use models::domains::{notifications, users};
use models::params::notification::SendNotificationParams;
use models::schemas::live::NewNotificationEvent;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const DEFAULT_TITLE: &str = "New notification";

/// Stores a notification, then pushes it to the addressed user's room.
pub async fn send_notification(
    state: &AppState,
    params: SendNotificationParams,
) -> AppResult<notifications::Model> {
    users::Entity::find_by_id(params.user_id)
        .one(&state.conn)
        .await?
        .ok_or(AppError::NotFound("user"))?;

    let notification = notifications::ActiveModel {
        user_id: Set(params.user_id),
        title: Set(params.title.unwrap_or_else(|| DEFAULT_TITLE.to_string())),
        message: Set(params.message),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(&state.conn)
    .await?;

    info!(
        notification_id = notification.id,
        user_id = notification.user_id,
        "Notification stored"
    );

    state
        .broadcaster
        .notify_user(notification.user_id, &NewNotificationEvent::from(&notification));
    Ok(notification)
}

/// Notifications of a user, newest first.
pub async fn list_notifications(
    db: &DbConn,
    user_id: i32,
) -> AppResult<Vec<notifications::Model>> {
    Ok(notifications::Entity::find()
        .filter(notifications::Column::UserId.eq(user_id))
        .order_by_desc(notifications::Column::CreatedAt)
        .order_by_desc(notifications::Column::Id)
        .all(db)
        .await?)
}
