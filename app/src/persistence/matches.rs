use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    Set, TransactionTrait, sea_query::Expr,
};
use tracing::info;

use models::domains::{matches, sea_orm_active_enums::MatchStatus, tournaments};
use models::params::matches::{CreateMatchParams, UpdateMatchParams, UpdateScoreParams};
use models::schemas::{live::ScoreUpdatedEvent, matches::BracketSchema};

use super::non_blank;
use super::registrations::approved_team_labels;
use crate::core::{
    bracket::{FIRST_ROUND, pair_teams},
    conflict::Slot,
};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

const DEFAULT_ROUND: &str = "Group stage";

/// Pairs the approved teams of a tournament into a first round.
///
/// Each call shuffles again and appends a new set of matches; earlier rounds
/// are left untouched.
pub async fn generate_matches(db: &DbConn, tournament_id: i32) -> AppResult<BracketSchema> {
    let txn = db.begin().await?;

    tournaments::Entity::find_by_id(tournament_id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("tournament"))?;

    let teams = approved_team_labels(&txn, tournament_id).await?;
    let team_count = teams.len();

    let pairs = {
        let mut rng = rand::rng();
        pair_teams(teams, &mut rng)?
    };
    let match_count = pairs.len();

    let rows = pairs.into_iter().map(|(team1, team2)| matches::ActiveModel {
        tournament_id: Set(tournament_id),
        team1: Set(team1),
        team2: Set(team2),
        score1: Set(0),
        score2: Set(0),
        round: Set(FIRST_ROUND.to_string()),
        start_time: Set(None),
        venue: Set(None),
        status: Set(MatchStatus::Scheduled),
        ..Default::default()
    });

    matches::Entity::insert_many(rows).exec(&txn).await?;
    txn.commit().await?;

    info!(
        tournament_id,
        teams = team_count,
        matches = match_count,
        "Generated first-round matches"
    );
    Ok(BracketSchema {
        teams: team_count,
        matches: match_count,
    })
}

pub async fn create_match(db: &DbConn, params: CreateMatchParams) -> AppResult<matches::Model> {
    tournaments::Entity::find_by_id(params.tournament_id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound("tournament"))?;

    Ok(matches::ActiveModel {
        tournament_id: Set(params.tournament_id),
        team1: Set(params.team1),
        team2: Set(params.team2),
        score1: Set(0),
        score2: Set(0),
        round: Set(params.round.unwrap_or_else(|| DEFAULT_ROUND.to_string())),
        start_time: Set(params.start_time),
        venue: Set(non_blank(params.venue)),
        status: Set(MatchStatus::Scheduled),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

pub async fn list_matches(db: &DbConn, tournament_id: i32) -> AppResult<Vec<matches::Model>> {
    Ok(matches::Entity::find()
        .filter(matches::Column::TournamentId.eq(tournament_id))
        .order_by_asc(matches::Column::Id)
        .all(db)
        .await?)
}

/// Live and scheduled matches across tournaments: live ones first, then by
/// start time with unscheduled matches last.
pub async fn live_matches(
    db: &DbConn,
) -> AppResult<Vec<(matches::Model, Option<tournaments::Model>)>> {
    let mut rows = matches::Entity::find()
        .filter(matches::Column::Status.is_in([MatchStatus::Live, MatchStatus::Scheduled]))
        .find_also_related(tournaments::Entity)
        .order_by_asc(matches::Column::Id)
        .all(db)
        .await?;

    rows.sort_by_key(|(m, _)| (m.status != MatchStatus::Live, m.start_time.is_none(), m.start_time));
    Ok(rows)
}

/// First match at `venue` (in store order) whose assumed window overlaps `slot`.
pub async fn check_conflict(
    db: &DbConn,
    venue: &str,
    slot: Slot,
) -> AppResult<Option<matches::Model>> {
    let candidates = matches::Entity::find()
        .filter(matches::Column::Venue.eq(venue))
        .filter(matches::Column::StartTime.is_not_null())
        .filter(matches::Column::StartTime.lt(slot.end))
        .order_by_asc(matches::Column::Id)
        .all(db)
        .await?;

    Ok(candidates
        .into_iter()
        .find(|m| m.start_time.is_some_and(|start| slot.overlaps(start))))
}

/// Stores a new score and tells every connected client about it.
pub async fn update_score(state: &AppState, params: UpdateScoreParams) -> AppResult<()> {
    let result = matches::Entity::update_many()
        .col_expr(matches::Column::Score1, Expr::value(params.score1))
        .col_expr(matches::Column::Score2, Expr::value(params.score2))
        .filter(matches::Column::Id.eq(params.match_id))
        .exec(&state.conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("match"));
    }

    state.broadcaster.score_updated(&ScoreUpdatedEvent::score(
        params.match_id,
        params.score1,
        params.score2,
    ));
    Ok(())
}

/// Replaces the editable fields of a match and publishes the new state.
///
/// A missing status keeps the current one.
pub async fn update_match(
    state: &AppState,
    id: i32,
    params: UpdateMatchParams,
) -> AppResult<matches::Model> {
    let current = matches::Entity::find_by_id(id)
        .one(&state.conn)
        .await?
        .ok_or(AppError::NotFound("match"))?;

    let status = params.status.unwrap_or(current.status);
    if !current.status.can_transition_to(status) {
        return Err(AppError::transition(current.status, status));
    }

    let mut active = current.into_active_model();
    active.score1 = Set(params.score1);
    active.score2 = Set(params.score2);
    active.start_time = Set(params.start_time);
    active.venue = Set(non_blank(params.venue));
    active.status = Set(status);
    let updated = active.update(&state.conn).await?;

    state
        .broadcaster
        .score_updated(&ScoreUpdatedEvent::from(&updated));
    Ok(updated)
}

pub async fn delete_match(db: &DbConn, id: i32) -> AppResult<()> {
    let result = matches::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("match"));
    }
    Ok(())
}
