use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::core::broadcast::Broadcaster;

#[derive(Clone)]
pub struct AppState {
    pub conn: DatabaseConnection,
    pub config: Config,
    pub broadcaster: Broadcaster,
}
