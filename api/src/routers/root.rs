use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use serde_json::json;
use utoipa::OpenApi;

use app::state::AppState;

use crate::error::ApiError;
use crate::openapi::ApiDoc;

/// Service health, including a round trip to the store.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service and store are reachable"),
        (status = 500, description = "Store unreachable"),
    )
)]
pub async fn root_get(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.conn.ping().await?;

    Ok(Json(json!({
        "status": "ok",
        "database": "up",
    })))
}

async fn openapi_get() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

pub fn create_root_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root_get))
        .route("/api-docs/openapi.json", get(openapi_get))
}
