use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::migrate;

/// Connects to `db_url` and brings the schema up to date.
///
/// With `sqlite::memory:` every call gets its own database; the pool is
/// pinned to one connection so that database lives as long as the pool.
pub async fn setup_test_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url);
    opt.min_connections(1)
        .max_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opt).await?;
    migrate(&db).await?;
    Ok(db)
}
