use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sportreg API",
        version = "0.1.0",
        description = "Tournament registration, brackets and live match updates",
        license(name = "MIT"),
    ),
    paths(
        crate::routers::root::root_get,
        crate::routers::auth::signup_post,
        crate::routers::auth::login_post,
        crate::routers::auth::me_get,
        crate::routers::user::users_get,
        crate::routers::user::users_post,
        crate::routers::user::users_id_get,
        crate::routers::user::users_id_put,
        crate::routers::user::users_id_password_put,
        crate::routers::user::users_id_delete,
        crate::routers::tournament::tournaments_get,
        crate::routers::tournament::tournaments_post,
        crate::routers::tournament::tournaments_id_get,
        crate::routers::tournament::tournaments_id_put,
        crate::routers::tournament::tournaments_id_registrations_get,
        crate::routers::tournament::tournaments_id_matches_get,
        crate::routers::tournament::tournaments_id_generate_matches_post,
        crate::routers::registration::register_post,
        crate::routers::registration::registrations_id_put,
        crate::routers::matches::matches_post,
        crate::routers::matches::matches_live_get,
        crate::routers::matches::check_conflict_post,
        crate::routers::matches::update_score_post,
        crate::routers::matches::matches_id_put,
        crate::routers::matches::matches_id_delete,
        crate::routers::notification::notifications_send_post,
        crate::routers::notification::notifications_user_get,
    ),
    components(
        schemas(
            crate::models::response::ApiErrorResponse,
            models::schemas::user::UserSchema,
            models::schemas::user::AuthUser,
            models::schemas::user::TokensSchema,
            models::schemas::tournament::TournamentSchema,
            models::schemas::registration::RegistrationSchema,
            models::schemas::matches::MatchSchema,
            models::schemas::matches::LiveMatchSchema,
            models::schemas::matches::ConflictSchema,
            models::schemas::matches::BracketSchema,
            models::schemas::notification::NotificationSchema,
            models::schemas::live::ScoreUpdatedEvent,
            models::schemas::live::NewNotificationEvent,
            models::params::user::SignupParams,
            models::params::user::LoginUserParams,
            models::params::user::CreateUserParams,
            models::params::user::UpdateUserParams,
            models::params::user::ChangePasswordParams,
            models::params::tournament::CreateTournamentParams,
            models::params::tournament::UpdateTournamentParams,
            models::params::registration::RegisterParams,
            models::params::registration::UpdateRegistrationParams,
            models::params::matches::CreateMatchParams,
            models::params::matches::UpdateScoreParams,
            models::params::matches::UpdateMatchParams,
            models::params::matches::CheckConflictParams,
            models::params::notification::SendNotificationParams,
            models::domains::sea_orm_active_enums::UserRole,
            models::domains::sea_orm_active_enums::TournamentStatus,
            models::domains::sea_orm_active_enums::RegistrationStatus,
            models::domains::sea_orm_active_enums::MatchStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Service status"),
        (name = "auth", description = "Accounts and access tokens"),
        (name = "users", description = "User management endpoints"),
        (name = "tournaments", description = "Tournaments, their registrations and brackets"),
        (name = "registrations", description = "Registration workflow"),
        (name = "matches", description = "Scheduling, conflicts and scores"),
        (name = "notifications", description = "Targeted user notifications"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
