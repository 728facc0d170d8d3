use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use app::persistence::matches::{generate_matches, list_matches};
use app::persistence::registrations::list_registrations;
use app::persistence::tournaments::{
    create_tournament, get_tournament, list_tournaments, update_tournament,
};
use app::state::AppState;
use models::params::tournament::{CreateTournamentParams, UpdateTournamentParams};
use models::queries::TournamentQuery;
use models::schemas::matches::{BracketSchema, MatchSchema};
use models::schemas::registration::RegistrationSchema;
use models::schemas::tournament::TournamentSchema;

use crate::extractor::{AdminUser, Json, Path, Query, Valid};
use crate::{ApiResponse, error::ApiError};

#[utoipa::path(
    get,
    path = "/tournaments",
    tag = "tournaments",
    params(TournamentQuery),
    responses(
        (status = 200, description = "Tournaments, latest start date first", body = [TournamentSchema]),
    )
)]
pub async fn tournaments_get(
    State(state): State<AppState>,
    Query(query): Query<TournamentQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let tournaments = list_tournaments(&state.conn, query).await?;
    Ok(Json(
        tournaments
            .into_iter()
            .map(TournamentSchema::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/tournaments",
    tag = "tournaments",
    request_body = CreateTournamentParams,
    responses(
        (status = 201, description = "Tournament created"),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Admin only"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn tournaments_post(
    State(state): State<AppState>,
    _: AdminUser,
    Valid(Json(params)): Valid<Json<CreateTournamentParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let tournament = create_tournament(&state.conn, params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Tournament created successfully",
            Some(TournamentSchema::from(tournament)),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/tournaments/{id}",
    tag = "tournaments",
    params(("id" = i32, Path, description = "Tournament id")),
    responses(
        (status = 200, description = "The tournament", body = TournamentSchema),
        (status = 404, description = "No such tournament"),
    )
)]
pub async fn tournaments_id_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let tournament = get_tournament(&state.conn, id).await?;
    Ok(Json(TournamentSchema::from(tournament)))
}

#[utoipa::path(
    put,
    path = "/tournaments/{id}",
    tag = "tournaments",
    params(("id" = i32, Path, description = "Tournament id")),
    request_body = UpdateTournamentParams,
    responses(
        (status = 200, description = "Tournament updated"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "No such tournament"),
        (status = 409, description = "Status may only move forward"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn tournaments_id_put(
    State(state): State<AppState>,
    _: AdminUser,
    Path(id): Path<i32>,
    Valid(Json(params)): Valid<Json<UpdateTournamentParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let tournament = update_tournament(&state.conn, id, params).await?;

    Ok(Json(ApiResponse::success(
        "Tournament updated successfully",
        Some(TournamentSchema::from(tournament)),
    )))
}

#[utoipa::path(
    get,
    path = "/tournaments/{id}/registrations",
    tag = "tournaments",
    params(("id" = i32, Path, description = "Tournament id")),
    responses(
        (status = 200, description = "Registrations with registrant details, newest first", body = [RegistrationSchema]),
    )
)]
pub async fn tournaments_id_registrations_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let registrations = list_registrations(&state.conn, id).await?;
    Ok(Json(
        registrations
            .into_iter()
            .map(RegistrationSchema::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/tournaments/{id}/matches",
    tag = "tournaments",
    params(("id" = i32, Path, description = "Tournament id")),
    responses(
        (status = 200, description = "Matches of the tournament in creation order", body = [MatchSchema]),
    )
)]
pub async fn tournaments_id_matches_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let matches = list_matches(&state.conn, id).await?;
    Ok(Json(
        matches.into_iter().map(MatchSchema::from).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/tournaments/{id}/generate-matches",
    tag = "tournaments",
    params(("id" = i32, Path, description = "Tournament id")),
    responses(
        (status = 201, description = "First-round matches created", body = BracketSchema),
        (status = 400, description = "Fewer than two or an odd number of approved teams"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "No such tournament"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn tournaments_id_generate_matches_post(
    State(state): State<AppState>,
    _: AdminUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let bracket = generate_matches(&state.conn, id).await?;
    let message = format!("{} matches generated successfully", bracket.matches);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(&message, Some(bracket))),
    ))
}

pub fn create_tournament_router() -> Router<AppState> {
    Router::new()
        .route("/", get(tournaments_get).post(tournaments_post))
        .route("/{id}", get(tournaments_id_get).put(tournaments_id_put))
        .route("/{id}/registrations", get(tournaments_id_registrations_get))
        .route("/{id}/matches", get(tournaments_id_matches_get))
        .route(
            "/{id}/generate-matches",
            post(tournaments_id_generate_matches_post),
        )
}
