use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationParams {
    pub user_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
}
