use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domains::sea_orm_active_enums::RegistrationStatus;

#[derive(Deserialize, Validate, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterParams {
    pub user_id: i32,
    pub tournament_id: i32,
    #[validate(length(max = 255))]
    pub team_name: Option<String>,
}

#[derive(Deserialize, Validate, ToSchema, Debug)]
pub struct UpdateRegistrationParams {
    pub status: RegistrationStatus,
}
