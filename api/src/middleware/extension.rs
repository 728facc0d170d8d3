use app::{state::AppState, utils::decode_data};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use models::schemas::user::{AuthSchema, AuthUser};
use tracing::debug;

/// Attaches the caller's identity, if any, to the request.
///
/// A missing or invalid token leaves the request anonymous; handlers that need
/// an identity reject it through the auth extractors.
pub async fn extension(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "));

    let user = token.and_then(|token| {
        decode_data::<AuthUser>(&state.config, token)
            .inspect_err(|e| debug!(error = %e, "Ignoring invalid access token"))
            .ok()
    });

    req.extensions_mut().insert(AuthSchema { user });
    next.run(req).await
}
