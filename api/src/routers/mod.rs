use axum::{Router, routing::post};

pub mod auth;
pub mod matches;
pub mod notification;
pub mod registration;
pub mod root;
pub mod tournament;
pub mod user;

use app::state::AppState;
use auth::create_auth_router;
use matches::create_match_router;
use notification::create_notification_router;
use registration::{create_registration_router, register_post};
use root::create_root_router;
use tournament::create_tournament_router;
use user::create_user_router;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(create_root_router())
        .route("/register", post(register_post))
        .nest("/auth", create_auth_router())
        .nest("/users", create_user_router())
        .nest("/tournaments", create_tournament_router())
        .nest("/registrations", create_registration_router())
        .nest("/matches", create_match_router())
        .nest("/notifications", create_notification_router())
        .with_state(state)
}
