use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::{sea_orm_active_enums::TournamentStatus, tournaments};

#[derive(Serialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSchema {
    pub id: i32,
    pub name: String,
    pub sport_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub status: TournamentStatus,
    pub description: String,
    pub banner_url: String,
    pub fee: f64,
    pub max_participants: i32,
    pub registration_deadline: Option<NaiveDate>,
    pub contact_info: String,
}

impl From<tournaments::Model> for TournamentSchema {
    fn from(tournament: tournaments::Model) -> Self {
        Self {
            id: tournament.id,
            name: tournament.name,
            sport_type: tournament.sport_type,
            start_date: tournament.start_date,
            end_date: tournament.end_date,
            location: tournament.location,
            status: tournament.status,
            description: tournament.description,
            banner_url: tournament.banner_url,
            fee: tournament.fee,
            max_participants: tournament.max_participants,
            registration_deadline: tournament.registration_deadline,
            contact_info: tournament.contact_info,
        }
    }
}
