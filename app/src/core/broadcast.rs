//! Live update fan-out.
//!
//! Delivery is at-most-once: the store write has already happened when an
//! event is published, publishing runs detached from the request and a failure
//! is only logged. Clients that missed events reconcile through the regular
//! read endpoints.

use std::sync::Arc;

use models::schemas::{
    live::{NEW_NOTIFICATION, NewNotificationEvent, SCORE_UPDATED, ScoreUpdatedEvent},
    user::AuthUser,
};
use serde::Serialize;
use serde_json::Value;
use socketioxide::SocketIo;
use tracing::{debug, warn};

/// Publish side of the realtime transport.
pub trait LiveChannel: Send + Sync + 'static {
    /// Publishes to every connected client.
    fn emit_all(&self, event: &'static str, payload: Value);

    /// Publishes to the connections that joined `room`.
    fn emit_to(&self, room: String, event: &'static str, payload: Value);
}

impl LiveChannel for SocketIo {
    fn emit_all(&self, event: &'static str, payload: Value) {
        let io = self.clone();
        tokio::spawn(async move {
            if let Err(e) = io.emit(event, &payload).await {
                warn!(event, error = %e, "Failed to broadcast event");
            }
        });
    }

    fn emit_to(&self, room: String, event: &'static str, payload: Value) {
        let io = self.clone();
        tokio::spawn(async move {
            if let Err(e) = io.to(room.clone()).emit(event, &payload).await {
                warn!(event, room = %room, error = %e, "Failed to emit event to room");
            }
        });
    }
}

/// Name of the membership group a user's connections join.
pub fn user_room(user_id: i32) -> String {
    format!("user_{user_id}")
}

/// A connection may join a user's room only as that user or as an admin.
pub fn may_join(caller: Option<&AuthUser>, user_id: i32) -> bool {
    caller.is_some_and(|caller| caller.is_self_or_admin(user_id))
}

#[derive(Clone)]
pub struct Broadcaster {
    channel: Arc<dyn LiveChannel>,
}

impl Broadcaster {
    pub fn new(channel: impl LiveChannel) -> Self {
        Self {
            channel: Arc::new(channel),
        }
    }

    pub fn score_updated(&self, event: &ScoreUpdatedEvent) {
        if let Some(payload) = to_payload(SCORE_UPDATED, event) {
            debug!(match_id = event.match_id, "Publishing score update");
            self.channel.emit_all(SCORE_UPDATED, payload);
        }
    }

    pub fn notify_user(&self, user_id: i32, event: &NewNotificationEvent) {
        if let Some(payload) = to_payload(NEW_NOTIFICATION, event) {
            debug!(user_id, notification_id = event.id, "Publishing notification");
            self.channel.emit_to(user_room(user_id), NEW_NOTIFICATION, payload);
        }
    }
}

fn to_payload<T: Serialize>(event: &'static str, data: &T) -> Option<Value> {
    serde_json::to_value(data)
        .inspect_err(|e| warn!(event, error = %e, "Failed to serialize event payload"))
        .ok()
}
