use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::{registrations, sea_orm_active_enums::RegistrationStatus, users};

#[derive(Serialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSchema {
    pub id: i32,
    pub user_id: i32,
    pub tournament_id: i32,
    pub status: RegistrationStatus,
    pub team_name: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
}

impl From<registrations::Model> for RegistrationSchema {
    fn from(registration: registrations::Model) -> Self {
        Self {
            id: registration.id,
            user_id: registration.user_id,
            tournament_id: registration.tournament_id,
            status: registration.status,
            team_name: registration.team_name,
            full_name: None,
            email: None,
        }
    }
}

impl From<(registrations::Model, Option<users::Model>)> for RegistrationSchema {
    fn from((registration, user): (registrations::Model, Option<users::Model>)) -> Self {
        let (full_name, email) = match user {
            Some(user) => (Some(user.full_name), Some(user.email)),
            None => (None, None),
        };
        Self {
            full_name,
            email,
            ..Self::from(registration)
        }
    }
}
