use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::domains::sea_orm_active_enums::TournamentStatus;

#[derive(Deserialize, Validate, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_dates"))]
pub struct CreateTournamentParams {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 64))]
    pub sport_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    pub status: Option<TournamentStatus>,
    pub description: Option<String>,
    pub banner_url: Option<String>,
    #[validate(range(min = 0.0))]
    pub fee: Option<f64>,
    #[validate(range(min = 0))]
    pub max_participants: Option<i32>,
    pub registration_deadline: Option<NaiveDate>,
    pub contact_info: Option<String>,
}

#[derive(Deserialize, Validate, ToSchema, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_dates"))]
pub struct UpdateTournamentParams {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub sport_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,
    pub status: Option<TournamentStatus>,
    pub description: Option<String>,
    pub banner_url: Option<String>,
    #[validate(range(min = 0.0))]
    pub fee: Option<f64>,
    #[validate(range(min = 0))]
    pub max_participants: Option<i32>,
    /// Absent keeps the deadline, `null` clears it.
    #[serde(default, deserialize_with = "present")]
    pub registration_deadline: Option<Option<NaiveDate>>,
    pub contact_info: Option<String>,
}

/// Marks a field that appeared in the body, even as `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn validate_create_dates(params: &CreateTournamentParams) -> Result<(), ValidationError> {
    if params.end_date < params.start_date {
        return Err(ValidationError::new("end_date_before_start_date"));
    }
    Ok(())
}

fn validate_update_dates(params: &UpdateTournamentParams) -> Result<(), ValidationError> {
    match (params.start_date, params.end_date) {
        (Some(start), Some(end)) if end < start => {
            Err(ValidationError::new("end_date_before_start_date"))
        }
        _ => Ok(()),
    }
}
