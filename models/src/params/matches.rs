use chrono::NaiveDateTime;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domains::sea_orm_active_enums::MatchStatus;

#[derive(Deserialize, Validate, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchParams {
    pub tournament_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub team1: String,
    #[validate(length(min = 1, max = 255))]
    pub team2: String,
    #[validate(length(min = 1, max = 64))]
    pub round: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    #[validate(length(min = 1, max = 255))]
    pub venue: Option<String>,
}

#[derive(Deserialize, Validate, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScoreParams {
    pub match_id: i32,
    #[validate(range(min = 0))]
    pub score1: i32,
    #[validate(range(min = 0))]
    pub score2: i32,
}

/// Full replacement of the editable match fields.
#[derive(Deserialize, Validate, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchParams {
    #[validate(range(min = 0))]
    pub score1: i32,
    #[validate(range(min = 0))]
    pub score2: i32,
    pub start_time: Option<NaiveDateTime>,
    #[validate(length(min = 1, max = 255))]
    pub venue: Option<String>,
    pub status: Option<MatchStatus>,
}

/// Candidate slot; `date` is `YYYY-MM-DD`, times are `HH:MM` or `HH:MM:SS`.
#[derive(Deserialize, Validate, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckConflictParams {
    #[validate(length(min = 1))]
    pub start_time: String,
    #[validate(length(min = 1))]
    pub end_time: String,
    #[validate(length(min = 1))]
    pub venue: String,
    #[validate(length(min = 1))]
    pub date: String,
}
