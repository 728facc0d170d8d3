use chrono::NaiveDateTime;
use sea_orm::EntityTrait;
use serde_json::json;

use app::core::broadcast::user_room;
use app::error::AppError;
use app::persistence::matches::{create_match, live_matches, update_match, update_score};
use app::persistence::notifications::{list_notifications, send_notification};
use models::domains::matches;
use models::domains::sea_orm_active_enums::{MatchStatus, UserRole};
use models::params::matches::{CreateMatchParams, UpdateMatchParams, UpdateScoreParams};
use models::params::notification::SendNotificationParams;

use crate::common::{insert_tournament, insert_user, test_state};

async fn new_match(
    db: &sea_orm::DatabaseConnection,
    tournament_id: i32,
    start_time: Option<&str>,
) -> matches::Model {
    create_match(
        db,
        CreateMatchParams {
            tournament_id,
            team1: "Lions".to_string(),
            team2: "Eagles".to_string(),
            round: None,
            start_time: start_time
                .map(|s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()),
            venue: Some("Court A".to_string()),
        },
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn score_update_reaches_every_connection() {
    let (state, channel) = test_state().await;
    let watcher = channel.connect();
    let other = channel.connect();
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;
    let m = new_match(&state.conn, tournament.id, None).await;

    update_score(
        &state,
        UpdateScoreParams {
            match_id: m.id,
            score1: 2,
            score2: 1,
        },
    )
    .await
    .unwrap();

    let stored = matches::Entity::find_by_id(m.id)
        .one(&state.conn)
        .await
        .unwrap()
        .unwrap();
    assert_eq!((stored.score1, stored.score2), (2, 1));

    let expected = (
        "score_updated".to_string(),
        json!({ "matchId": m.id, "score1": 2, "score2": 1 }),
    );
    assert_eq!(channel.received(watcher), vec![expected.clone()]);
    assert_eq!(channel.received(other), vec![expected]);
}

#[tokio::test]
async fn score_update_for_missing_match_emits_nothing() {
    let (state, channel) = test_state().await;
    let watcher = channel.connect();

    let result = update_score(
        &state,
        UpdateScoreParams {
            match_id: 999,
            score1: 1,
            score2: 0,
        },
    )
    .await;

    assert!(matches!(result, Err(AppError::NotFound("match"))));
    assert!(channel.received(watcher).is_empty());
}

#[tokio::test]
async fn match_update_broadcasts_extended_fields() {
    let (state, channel) = test_state().await;
    let watcher = channel.connect();
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;
    let m = new_match(&state.conn, tournament.id, Some("2024-08-12 09:00")).await;

    let updated = update_match(
        &state,
        m.id,
        UpdateMatchParams {
            score1: 1,
            score2: 1,
            start_time: m.start_time,
            venue: Some("Court B".to_string()),
            status: Some(MatchStatus::Live),
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.status, MatchStatus::Live);

    let received = channel.received(watcher);
    assert_eq!(received.len(), 1);
    let (event, payload) = &received[0];
    assert_eq!(event, "score_updated");
    assert_eq!(payload["status"], "live");
    assert_eq!(payload["venue"], "Court B");
    assert_eq!(payload["startTime"], "2024-08-12T09:00:00");
}

#[tokio::test]
async fn completed_match_cannot_go_live_again() {
    let (state, channel) = test_state().await;
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;
    let m = new_match(&state.conn, tournament.id, None).await;
    let params = |status| UpdateMatchParams {
        score1: 3,
        score2: 0,
        start_time: None,
        venue: None,
        status: Some(status),
    };

    update_match(&state, m.id, params(MatchStatus::Completed))
        .await
        .unwrap();
    let watcher = channel.connect();
    let result = update_match(&state, m.id, params(MatchStatus::Live)).await;

    assert!(matches!(result, Err(AppError::InvalidTransition { .. })));
    assert!(channel.received(watcher).is_empty());
}

#[tokio::test]
async fn live_matches_come_first() {
    let (state, _) = test_state().await;
    let tournament = insert_tournament(&state.conn, "Summer Cup").await;
    let unscheduled = new_match(&state.conn, tournament.id, None).await;
    let later = new_match(&state.conn, tournament.id, Some("2024-08-12 15:00")).await;
    let earlier = new_match(&state.conn, tournament.id, Some("2024-08-12 09:00")).await;
    let live = new_match(&state.conn, tournament.id, Some("2024-08-12 18:00")).await;
    let done = new_match(&state.conn, tournament.id, Some("2024-08-12 08:00")).await;

    for (id, status) in [(live.id, MatchStatus::Live), (done.id, MatchStatus::Completed)] {
        update_match(
            &state,
            id,
            UpdateMatchParams {
                score1: 0,
                score2: 0,
                start_time: None,
                venue: None,
                status: Some(status),
            },
        )
        .await
        .unwrap();
    }

    let rows = live_matches(&state.conn).await.unwrap();
    let ids: Vec<i32> = rows.iter().map(|(m, _)| m.id).collect();
    assert_eq!(ids, vec![live.id, earlier.id, later.id, unscheduled.id]);
    assert!(rows.iter().all(|(_, t)| t.as_ref().map(|t| t.id) == Some(tournament.id)));
}

#[tokio::test]
async fn notification_reaches_only_the_addressed_room() {
    let (state, channel) = test_state().await;
    let addressee = insert_user(&state.conn, "Target User", UserRole::Athlete).await;
    let bystander = insert_user(&state.conn, "Other User", UserRole::Athlete).await;

    let joined = channel.connect();
    channel.join(joined, &user_room(addressee.id));
    let second_tab = channel.connect();
    channel.join(second_tab, &user_room(addressee.id));
    let other_room = channel.connect();
    channel.join(other_room, &user_room(bystander.id));
    let never_joined = channel.connect();

    let notification = send_notification(
        &state,
        SendNotificationParams {
            user_id: addressee.id,
            title: None,
            message: "Your match starts at 09:00".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(notification.title, "New notification");

    for connection in [joined, second_tab] {
        let received = channel.received(connection);
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].0, "new_notification");
        assert_eq!(received[0].1["id"], notification.id);
        assert_eq!(received[0].1["message"], "Your match starts at 09:00");
    }
    assert!(channel.received(other_room).is_empty());
    assert!(channel.received(never_joined).is_empty());

    let stored = list_notifications(&state.conn, addressee.id).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert!(list_notifications(&state.conn, bystander.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn notification_for_unknown_user_is_not_stored() {
    let (state, channel) = test_state().await;
    let watcher = channel.connect();
    channel.join(watcher, &user_room(42));

    let result = send_notification(
        &state,
        SendNotificationParams {
            user_id: 42,
            title: Some("Hello".to_string()),
            message: "Anyone there?".to_string(),
        },
    )
    .await;

    assert!(matches!(result, Err(AppError::NotFound("user"))));
    assert!(channel.received(watcher).is_empty());
}
