use anyhow::Context;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::middleware::from_fn_with_state;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use socketioxide::SocketIo;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use app::config::Config;
use app::core::broadcast::Broadcaster;
use app::state::AppState;

use crate::action::register_live_namespace;
use crate::middleware::extension::extension;
use crate::routers::create_router;

/// Full application: HTTP routes plus the socket.io endpoint publishing live
/// updates.
pub fn setup_router(config: Config, conn: DatabaseConnection) -> anyhow::Result<Router> {
    let (socket_layer, io) = SocketIo::new_layer();
    register_live_namespace(&io, config.clone());

    let state = AppState {
        conn,
        config,
        broadcaster: Broadcaster::new(io),
    };

    Ok(build_router(state)?.layer(socket_layer))
}

/// HTTP routes over an existing state, without the realtime transport.
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let origin = state
        .config
        .allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid ALLOWED_ORIGIN: {}", state.config.allowed_origin))?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::OPTIONS,
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(origin);

    Ok(create_router(state.clone())
        .layer(from_fn_with_state(state, extension))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

pub fn setup_config() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();
    Config::from_env()
}

pub async fn setup_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_lifetime(std::time::Duration::from_secs(60))
        .min_connections(1)
        .max_connections(20)
        .sqlx_logging(false);

    Database::connect(opt).await
}
