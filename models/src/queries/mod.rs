use serde::Deserialize;
use utoipa::IntoParams;

use crate::domains::sea_orm_active_enums::TournamentStatus;

#[derive(Deserialize, Default, Debug, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TournamentQuery {
    /// Only tournaments in this status.
    pub status: Option<TournamentStatus>,
    /// Exact sport type, e.g. `football`.
    pub sport_type: Option<String>,
}
