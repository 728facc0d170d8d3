use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::{matches, sea_orm_active_enums::MatchStatus, tournaments};

#[derive(Serialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchSchema {
    pub id: i32,
    pub tournament_id: i32,
    pub team1: String,
    pub team2: String,
    pub score1: i32,
    pub score2: i32,
    pub round: String,
    pub start_time: Option<NaiveDateTime>,
    pub venue: Option<String>,
    pub status: MatchStatus,
}

impl From<matches::Model> for MatchSchema {
    fn from(m: matches::Model) -> Self {
        Self {
            id: m.id,
            tournament_id: m.tournament_id,
            team1: m.team1,
            team2: m.team2,
            score1: m.score1,
            score2: m.score2,
            round: m.round,
            start_time: m.start_time,
            venue: m.venue,
            status: m.status,
        }
    }
}

/// A live or upcoming match together with its tournament context.
#[derive(Serialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LiveMatchSchema {
    #[serde(flatten)]
    pub inner: MatchSchema,
    pub tournament_name: Option<String>,
    pub sport_type: Option<String>,
}

impl From<(matches::Model, Option<tournaments::Model>)> for LiveMatchSchema {
    fn from((m, tournament): (matches::Model, Option<tournaments::Model>)) -> Self {
        let (tournament_name, sport_type) = match tournament {
            Some(t) => (Some(t.name), Some(t.sport_type)),
            None => (None, None),
        };
        Self {
            inner: MatchSchema::from(m),
            tournament_name,
            sport_type,
        }
    }
}

#[derive(Serialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConflictSchema {
    pub has_conflict: bool,
    pub conflicting_match: Option<MatchSchema>,
}

impl From<Option<matches::Model>> for ConflictSchema {
    fn from(conflicting: Option<matches::Model>) -> Self {
        Self {
            has_conflict: conflicting.is_some(),
            conflicting_match: conflicting.map(MatchSchema::from),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BracketSchema {
    pub teams: usize,
    pub matches: usize,
}
