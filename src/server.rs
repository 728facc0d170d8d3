use anyhow::Context;
use tracing::info;

use api::{setup_config, setup_db, setup_router};
use app::persistence::users::seed_demo_users;
use utils::migrate;

/// Loads configuration, prepares the store and serves until the listener fails.
pub async fn run() -> anyhow::Result<()> {
    let config = setup_config()?;

    let conn = setup_db(&config.db_url)
        .await
        .context("database connection failed")?;
    migrate(&conn).await.context("migration failed")?;

    if config.seed_demo_users {
        let created = seed_demo_users(&conn).await?;
        info!(created, "Demo accounts ready");
    }

    let router = setup_router(config.clone(), conn)?;

    let listener = tokio::net::TcpListener::bind(config.get_server_url())
        .await
        .with_context(|| format!("cannot bind {}", config.get_server_url()))?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
