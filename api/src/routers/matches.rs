use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};

use app::core::conflict::Slot;
use app::persistence::matches::{
    check_conflict, create_match, delete_match, live_matches, update_match, update_score,
};
use app::state::AppState;
use models::params::matches::{
    CheckConflictParams, CreateMatchParams, UpdateMatchParams, UpdateScoreParams,
};
use models::schemas::matches::{ConflictSchema, LiveMatchSchema, MatchSchema};

use crate::extractor::{AdminUser, Json, Path, Valid};
use crate::{ApiResponse, error::ApiError};

#[utoipa::path(
    post,
    path = "/matches",
    tag = "matches",
    request_body = CreateMatchParams,
    responses(
        (status = 201, description = "Match scheduled"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "No such tournament"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn matches_post(
    State(state): State<AppState>,
    _: AdminUser,
    Valid(Json(params)): Valid<Json<CreateMatchParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let created = create_match(&state.conn, params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Match created successfully",
            Some(MatchSchema::from(created)),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/matches/live",
    tag = "matches",
    responses(
        (status = 200, description = "Live matches first, then scheduled ones by start time", body = [LiveMatchSchema]),
    )
)]
pub async fn matches_live_get(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rows = live_matches(&state.conn).await?;
    Ok(Json(
        rows.into_iter().map(LiveMatchSchema::from).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/matches/check-conflict",
    tag = "matches",
    request_body = CheckConflictParams,
    responses(
        (status = 200, description = "Whether the slot collides with a match at the venue", body = ConflictSchema),
        (status = 400, description = "Unparseable date or time, or end not after start"),
    )
)]
pub async fn check_conflict_post(
    State(state): State<AppState>,
    Valid(Json(params)): Valid<Json<CheckConflictParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let slot = Slot::parse(&params.date, &params.start_time, &params.end_time)?;
    let conflicting = check_conflict(&state.conn, params.venue.trim(), slot).await?;
    Ok(Json(ConflictSchema::from(conflicting)))
}

#[utoipa::path(
    post,
    path = "/matches/update-score",
    tag = "matches",
    request_body = UpdateScoreParams,
    responses(
        (status = 200, description = "Score stored and broadcast as score_updated"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "No such match; nothing is broadcast"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_score_post(
    State(state): State<AppState>,
    _: AdminUser,
    Valid(Json(params)): Valid<Json<UpdateScoreParams>>,
) -> Result<impl IntoResponse, ApiError> {
    update_score(&state, params).await?;
    Ok(Json(ApiResponse::message("Score updated successfully")))
}

#[utoipa::path(
    put,
    path = "/matches/{id}",
    tag = "matches",
    params(("id" = i32, Path, description = "Match id")),
    request_body = UpdateMatchParams,
    responses(
        (status = 200, description = "Match updated and broadcast as score_updated"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "No such match"),
        (status = 409, description = "Status cannot move backwards"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn matches_id_put(
    State(state): State<AppState>,
    _: AdminUser,
    Path(id): Path<i32>,
    Valid(Json(params)): Valid<Json<UpdateMatchParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = update_match(&state, id, params).await?;

    Ok(Json(ApiResponse::success(
        "Match updated successfully",
        Some(MatchSchema::from(updated)),
    )))
}

#[utoipa::path(
    delete,
    path = "/matches/{id}",
    tag = "matches",
    params(("id" = i32, Path, description = "Match id")),
    responses(
        (status = 200, description = "Match removed"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "No such match"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn matches_id_delete(
    State(state): State<AppState>,
    _: AdminUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    delete_match(&state.conn, id).await?;
    Ok(Json(ApiResponse::message("Match deleted successfully")))
}

pub fn create_match_router() -> Router<AppState> {
    Router::new()
        .route("/", post(matches_post))
        .route("/live", get(matches_live_get))
        .route("/check-conflict", post(check_conflict_post))
        .route("/update-score", post(update_score_post))
        .route("/{id}", put(matches_id_put).delete(matches_id_delete))
}
