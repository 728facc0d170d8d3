//! Payloads pushed over the realtime channel.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domains::{matches, notifications, sea_orm_active_enums::MatchStatus};

pub const SCORE_UPDATED: &str = "score_updated";
pub const NEW_NOTIFICATION: &str = "new_notification";
pub const JOIN_ROOM: &str = "join_room";

/// Sent to every connection whenever a match score or state changes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdatedEvent {
    pub match_id: i32,
    pub score1: i32,
    pub score2: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MatchStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

impl ScoreUpdatedEvent {
    pub fn score(match_id: i32, score1: i32, score2: i32) -> Self {
        Self {
            match_id,
            score1,
            score2,
            status: None,
            start_time: None,
            venue: None,
        }
    }
}

impl From<&matches::Model> for ScoreUpdatedEvent {
    fn from(m: &matches::Model) -> Self {
        Self {
            match_id: m.id,
            score1: m.score1,
            score2: m.score2,
            status: Some(m.status),
            start_time: m.start_time,
            venue: m.venue.clone(),
        }
    }
}

/// Sent to the room of the addressed user only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewNotificationEvent {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<&notifications::Model> for NewNotificationEvent {
    fn from(n: &notifications::Model) -> Self {
        Self {
            id: n.id,
            title: n.title.clone(),
            message: n.message.clone(),
            created_at: n.created_at.to_utc(),
        }
    }
}
