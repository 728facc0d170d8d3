use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbConn, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set,
};
use tracing::info;

use models::domains::{
    registrations, sea_orm_active_enums::RegistrationStatus, tournaments, users,
};
use models::params::registration::RegisterParams;

use super::{is_unique_violation, non_blank};
use crate::core::bracket::team_label;
use crate::error::{AppError, AppResult};

/// Records a pending registration of a user for a tournament.
///
/// A (user, tournament) pair registers at most once. The lookup gives the
/// common case a clean error; the unique index settles concurrent requests.
pub async fn register(db: &DbConn, params: RegisterParams) -> AppResult<registrations::Model> {
    tournaments::Entity::find_by_id(params.tournament_id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound("tournament"))?;
    users::Entity::find_by_id(params.user_id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound("user"))?;

    let existing = registrations::Entity::find()
        .filter(registrations::Column::UserId.eq(params.user_id))
        .filter(registrations::Column::TournamentId.eq(params.tournament_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(AppError::DuplicateRegistration);
    }

    let registration = insert_pending(db, params).await?;

    info!(
        registration_id = registration.id,
        user_id = registration.user_id,
        tournament_id = registration.tournament_id,
        "Registration recorded"
    );
    Ok(registration)
}

/// Inserts a pending row without looking for an earlier one; a second row
/// for the same pair is refused by the unique index.
pub async fn insert_pending<C: ConnectionTrait>(
    db: &C,
    params: RegisterParams,
) -> AppResult<registrations::Model> {
    registrations::ActiveModel {
        user_id: Set(params.user_id),
        tournament_id: Set(params.tournament_id),
        status: Set(RegistrationStatus::Pending),
        team_name: Set(non_blank(params.team_name)),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::DuplicateRegistration
        } else {
            e.into()
        }
    })
}

/// Registrations of a tournament with the registrant, newest first.
pub async fn list_registrations(
    db: &DbConn,
    tournament_id: i32,
) -> AppResult<Vec<(registrations::Model, Option<users::Model>)>> {
    Ok(registrations::Entity::find()
        .filter(registrations::Column::TournamentId.eq(tournament_id))
        .find_also_related(users::Entity)
        .order_by_desc(registrations::Column::Id)
        .all(db)
        .await?)
}

pub async fn set_registration_status(
    db: &DbConn,
    id: i32,
    status: RegistrationStatus,
) -> AppResult<registrations::Model> {
    let registration = registrations::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound("registration"))?;

    if !registration.status.can_transition_to(status) {
        return Err(AppError::transition(registration.status, status));
    }

    let mut active = registration.into_active_model();
    active.status = Set(status);
    let registration = active.update(db).await?;

    info!(registration_id = id, status = %status, "Registration status changed");
    Ok(registration)
}

/// Labels of the approved registrations of a tournament, in store order.
pub async fn approved_team_labels<C: ConnectionTrait>(
    conn: &C,
    tournament_id: i32,
) -> AppResult<Vec<String>> {
    let rows = registrations::Entity::find()
        .filter(registrations::Column::TournamentId.eq(tournament_id))
        .filter(registrations::Column::Status.eq(RegistrationStatus::Approved))
        .find_also_related(users::Entity)
        .order_by_asc(registrations::Column::Id)
        .all(conn)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(registration, user)| {
            let full_name = user.as_ref().map(|u| u.full_name.as_str()).unwrap_or_default();
            team_label(registration.team_name.as_deref(), full_name)
        })
        .collect())
}
