use std::collections::HashSet;

use app::error::AppError;
use app::persistence::matches::{generate_matches, list_matches};
use app::persistence::registrations::set_registration_status;
use models::domains::sea_orm_active_enums::{MatchStatus, RegistrationStatus, UserRole};

use crate::common::{approved_teams, insert_tournament, insert_user, registration, test_state};

#[tokio::test]
async fn no_approved_teams_is_insufficient() {
    let (state, _) = test_state().await;
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;

    let result = generate_matches(&state.conn, tournament.id).await;
    assert!(matches!(result, Err(AppError::InsufficientTeams(0))));
}

#[tokio::test]
async fn single_team_is_insufficient() {
    let (state, _) = test_state().await;
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;
    approved_teams(&state.conn, tournament.id, 1).await;

    let result = generate_matches(&state.conn, tournament.id).await;
    assert!(matches!(result, Err(AppError::InsufficientTeams(1))));
}

#[tokio::test]
async fn odd_team_count_creates_nothing() {
    let (state, _) = test_state().await;
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;
    approved_teams(&state.conn, tournament.id, 3).await;

    let result = generate_matches(&state.conn, tournament.id).await;

    assert!(matches!(result, Err(AppError::OddTeamCount(3))));
    assert!(list_matches(&state.conn, tournament.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn even_team_count_pairs_everyone_once() {
    let (state, _) = test_state().await;
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;
    let names = approved_teams(&state.conn, tournament.id, 4).await;

    let bracket = generate_matches(&state.conn, tournament.id).await.unwrap();
    assert_eq!(bracket.teams, 4);
    assert_eq!(bracket.matches, 2);

    let matches = list_matches(&state.conn, tournament.id).await.unwrap();
    assert_eq!(matches.len(), 2);

    let mut seen = HashSet::new();
    for m in &matches {
        assert_eq!(m.round, "Round 1");
        assert_eq!(m.status, MatchStatus::Scheduled);
        assert_eq!((m.score1, m.score2), (0, 0));
        assert_ne!(m.team1, m.team2);
        assert!(seen.insert(m.team1.clone()));
        assert!(seen.insert(m.team2.clone()));
    }
    let expected: HashSet<String> = names.into_iter().collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn only_approved_registrations_take_part() {
    let (state, _) = test_state().await;
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;
    approved_teams(&state.conn, tournament.id, 2).await;

    let pending = insert_user(&state.conn, "Pending Player", UserRole::Athlete).await;
    registration(&state.conn, pending.id, tournament.id, None).await;
    let rejected = insert_user(&state.conn, "Rejected Player", UserRole::Athlete).await;
    let reg = registration(&state.conn, rejected.id, tournament.id, None).await;
    set_registration_status(&state.conn, reg.id, RegistrationStatus::Rejected)
        .await
        .unwrap();

    let bracket = generate_matches(&state.conn, tournament.id).await.unwrap();
    assert_eq!(bracket.teams, 2);
    assert_eq!(bracket.matches, 1);
}

#[tokio::test]
async fn team_name_is_preferred_over_full_name() {
    let (state, _) = test_state().await;
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;

    for (name, team) in [("Player One", Some("Lions")), ("Player Two", None)] {
        let user = insert_user(&state.conn, name, UserRole::Athlete).await;
        let reg = registration(&state.conn, user.id, tournament.id, team).await;
        set_registration_status(&state.conn, reg.id, RegistrationStatus::Approved)
            .await
            .unwrap();
    }

    generate_matches(&state.conn, tournament.id).await.unwrap();

    let matches = list_matches(&state.conn, tournament.id).await.unwrap();
    let teams: HashSet<&str> = [matches[0].team1.as_str(), matches[0].team2.as_str()].into();
    assert_eq!(teams, HashSet::from(["Lions", "Player Two"]));
}

#[tokio::test]
async fn generating_again_appends_a_new_round() {
    let (state, _) = test_state().await;
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;
    approved_teams(&state.conn, tournament.id, 2).await;

    generate_matches(&state.conn, tournament.id).await.unwrap();
    generate_matches(&state.conn, tournament.id).await.unwrap();

    assert_eq!(list_matches(&state.conn, tournament.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_tournament_is_not_found() {
    let (state, _) = test_state().await;

    let result = generate_matches(&state.conn, 404).await;
    assert!(matches!(result, Err(AppError::NotFound("tournament"))));
}
