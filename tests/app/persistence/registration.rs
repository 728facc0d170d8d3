use sea_orm::{EntityTrait, PaginatorTrait};

use app::error::AppError;
use app::persistence::registrations::{
    insert_pending, list_registrations, register, set_registration_status,
};
use models::domains::registrations;
use models::domains::sea_orm_active_enums::{RegistrationStatus, UserRole};
use models::params::registration::RegisterParams;

use crate::common::{insert_tournament, insert_user, registration, test_state};

#[tokio::test]
async fn new_registration_is_pending() {
    let (state, _) = test_state().await;
    let user = insert_user(&state.conn, "Ama Mensah", UserRole::Athlete).await;
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;

    let reg = registration(&state.conn, user.id, tournament.id, Some("  ")).await;

    assert_eq!(reg.status, RegistrationStatus::Pending);
    assert_eq!(reg.user_id, user.id);
    assert_eq!(reg.tournament_id, tournament.id);
    assert_eq!(reg.team_name, None);
}

#[tokio::test]
async fn second_registration_for_same_pair_is_rejected() {
    let (state, _) = test_state().await;
    let user = insert_user(&state.conn, "Kofi Boateng", UserRole::Athlete).await;
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;
    registration(&state.conn, user.id, tournament.id, Some("Lions")).await;

    let again = register(
        &state.conn,
        RegisterParams {
            user_id: user.id,
            tournament_id: tournament.id,
            team_name: Some("Other name".to_string()),
        },
    )
    .await;

    assert!(matches!(again, Err(AppError::DuplicateRegistration)));
    let stored = registrations::Entity::find().count(&state.conn).await.unwrap();
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn unique_index_rejects_a_racing_duplicate() {
    let (state, _) = test_state().await;
    let user = insert_user(&state.conn, "Kojo Antwi", UserRole::Athlete).await;
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;
    registration(&state.conn, user.id, tournament.id, Some("Lions")).await;

    // Skips the lookup, as a request that lost the race would.
    let raced = insert_pending(
        &state.conn,
        RegisterParams {
            user_id: user.id,
            tournament_id: tournament.id,
            team_name: None,
        },
    )
    .await;

    assert!(matches!(raced, Err(AppError::DuplicateRegistration)));
    let stored = registrations::Entity::find().count(&state.conn).await.unwrap();
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn same_user_may_enter_different_tournaments() {
    let (state, _) = test_state().await;
    let user = insert_user(&state.conn, "Esi Owusu", UserRole::Athlete).await;
    let first = insert_tournament(&state.conn, "Summer Cup").await;
    let second = insert_tournament(&state.conn, "Winter Cup").await;

    registration(&state.conn, user.id, first.id, None).await;
    registration(&state.conn, user.id, second.id, None).await;

    let stored = registrations::Entity::find().count(&state.conn).await.unwrap();
    assert_eq!(stored, 2);
}

#[tokio::test]
async fn unknown_tournament_is_not_found() {
    let (state, _) = test_state().await;
    let user = insert_user(&state.conn, "Yaw Asante", UserRole::Athlete).await;

    let result = register(
        &state.conn,
        RegisterParams {
            user_id: user.id,
            tournament_id: 999,
            team_name: None,
        },
    )
    .await;

    assert!(matches!(result, Err(AppError::NotFound("tournament"))));
}

#[tokio::test]
async fn decided_registration_cannot_change_again() {
    let (state, _) = test_state().await;
    let user = insert_user(&state.conn, "Abena Osei", UserRole::Athlete).await;
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;
    let reg = registration(&state.conn, user.id, tournament.id, None).await;

    let approved = set_registration_status(&state.conn, reg.id, RegistrationStatus::Approved)
        .await
        .unwrap();
    assert_eq!(approved.status, RegistrationStatus::Approved);

    let result = set_registration_status(&state.conn, reg.id, RegistrationStatus::Rejected).await;
    assert!(matches!(result, Err(AppError::InvalidTransition { .. })));
}

#[tokio::test]
async fn listing_includes_registrant_details() {
    let (state, _) = test_state().await;
    let first = insert_user(&state.conn, "Kwame Nkrumah", UserRole::Athlete).await;
    let second = insert_user(&state.conn, "Efua Sutherland", UserRole::Athlete).await;
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;
    registration(&state.conn, first.id, tournament.id, None).await;
    registration(&state.conn, second.id, tournament.id, Some("Stars")).await;

    let rows = list_registrations(&state.conn, tournament.id).await.unwrap();

    assert_eq!(rows.len(), 2);
    let (newest, user) = &rows[0];
    assert_eq!(newest.team_name.as_deref(), Some("Stars"));
    assert_eq!(user.as_ref().map(|u| u.email.as_str()), Some("efua.sutherland@example.com"));
}
