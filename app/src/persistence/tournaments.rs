use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    Set,
};

use models::domains::{sea_orm_active_enums::TournamentStatus, tournaments};
use models::params::tournament::{CreateTournamentParams, UpdateTournamentParams};
use models::queries::TournamentQuery;

use crate::error::{AppError, AppResult};

pub async fn create_tournament(
    db: &DbConn,
    params: CreateTournamentParams,
) -> AppResult<tournaments::Model> {
    Ok(tournaments::ActiveModel {
        name: Set(params.name),
        sport_type: Set(params.sport_type),
        start_date: Set(params.start_date),
        end_date: Set(params.end_date),
        location: Set(params.location),
        status: Set(params.status.unwrap_or(TournamentStatus::Upcoming)),
        description: Set(params.description.unwrap_or_default()),
        banner_url: Set(params.banner_url.unwrap_or_default()),
        fee: Set(params.fee.unwrap_or_default()),
        max_participants: Set(params.max_participants.unwrap_or_default()),
        registration_deadline: Set(params.registration_deadline),
        contact_info: Set(params.contact_info.unwrap_or_default()),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

pub async fn list_tournaments(
    db: &DbConn,
    query: TournamentQuery,
) -> AppResult<Vec<tournaments::Model>> {
    let mut sql_query = tournaments::Entity::find();

    if let Some(status) = query.status {
        sql_query = sql_query.filter(tournaments::Column::Status.eq(status));
    }

    if let Some(sport_type) = query.sport_type.filter(|s| !s.is_empty()) {
        sql_query = sql_query.filter(tournaments::Column::SportType.eq(sport_type));
    }

    Ok(sql_query
        .order_by_desc(tournaments::Column::StartDate)
        .order_by_desc(tournaments::Column::Id)
        .all(db)
        .await?)
}

pub async fn get_tournament(db: &DbConn, id: i32) -> AppResult<tournaments::Model> {
    tournaments::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound("tournament"))
}

pub async fn update_tournament(
    db: &DbConn,
    id: i32,
    params: UpdateTournamentParams,
) -> AppResult<tournaments::Model> {
    let tournament = get_tournament(db, id).await?;

    if let Some(status) = params.status {
        if !tournament.status.can_transition_to(status) {
            return Err(AppError::transition(tournament.status, status));
        }
    }

    let start_date = params.start_date.unwrap_or(tournament.start_date);
    let end_date = params.end_date.unwrap_or(tournament.end_date);
    if end_date < start_date {
        return Err(AppError::Validation(
            "end date must not be before start date".into(),
        ));
    }

    let mut active = tournament.into_active_model();
    if let Some(name) = params.name {
        active.name = Set(name);
    }
    if let Some(sport_type) = params.sport_type {
        active.sport_type = Set(sport_type);
    }
    active.start_date = Set(start_date);
    active.end_date = Set(end_date);
    if let Some(location) = params.location {
        active.location = Set(location);
    }
    if let Some(status) = params.status {
        active.status = Set(status);
    }
    if let Some(description) = params.description {
        active.description = Set(description);
    }
    if let Some(banner_url) = params.banner_url {
        active.banner_url = Set(banner_url);
    }
    if let Some(fee) = params.fee {
        active.fee = Set(fee);
    }
    if let Some(max_participants) = params.max_participants {
        active.max_participants = Set(max_participants);
    }
    if let Some(deadline) = params.registration_deadline {
        active.registration_deadline = Set(deadline);
    }
    if let Some(contact_info) = params.contact_info {
        active.contact_info = Set(contact_info);
    }

    Ok(active.update(db).await?)
}
