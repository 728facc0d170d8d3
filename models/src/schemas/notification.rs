use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::notifications;

#[derive(Serialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSchema {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<notifications::Model> for NotificationSchema {
    fn from(n: notifications::Model) -> Self {
        Self {
            id: n.id,
            user_id: n.user_id,
            title: n.title,
            message: n.message,
            created_at: n.created_at.to_utc(),
        }
    }
}
