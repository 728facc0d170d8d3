use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{Method, StatusCode};
use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

use api::setup_router;
use app::persistence::matches::create_match;
use app::utils::encode_data;
use models::domains::{sea_orm_active_enums::UserRole, users};
use models::params::matches::CreateMatchParams;
use models::schemas::user::AuthUser;
use utils::testing::setup_test_db;

use crate::call;
use crate::common::{insert_tournament, insert_user, test_config};

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Next text frame, answering engine.io pings on the way.
async fn next_text(ws: &mut Client) -> String {
    loop {
        let frame = timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("no frame within 5s")
            .expect("socket closed")
            .unwrap();
        if let Message::Text(text) = frame {
            if text.as_str() == "2" {
                ws.send(Message::Text("3".into())).await.unwrap();
                continue;
            }
            return text.as_str().to_string();
        }
    }
}

/// Next socket.io event as `(name, payload)`.
async fn next_event(ws: &mut Client) -> (String, Value) {
    loop {
        let text = next_text(ws).await;
        if let Some(body) = text.strip_prefix("42") {
            let packet: Value = serde_json::from_str(body).unwrap();
            return (packet[0].as_str().unwrap().to_string(), packet[1].clone());
        }
    }
}

async fn emit(ws: &mut Client, event: &str, data: Value) {
    let packet = format!("42{}", json!([event, data]));
    ws.send(Message::Text(packet.as_str().into())).await.unwrap();
}

/// Opens a websocket session and joins the default namespace.
async fn connect(addr: SocketAddr, token: &str) -> Client {
    let url = format!("ws://{addr}/socket.io/?EIO=4&transport=websocket&token={token}");
    let (mut ws, _) = connect_async(url).await.unwrap();

    assert!(next_text(&mut ws).await.starts_with('0'));
    ws.send(Message::Text("40".into())).await.unwrap();
    assert!(next_text(&mut ws).await.starts_with("40"));
    ws
}

#[tokio::test]
async fn socket_clients_receive_room_and_broadcast_events() {
    let config = test_config();
    let conn = setup_test_db("sqlite::memory:").await.unwrap();
    let admin = insert_user(&conn, "Head Admin", UserRole::Admin).await;
    let athlete = insert_user(&conn, "Ama Mensah", UserRole::Athlete).await;
    let other = insert_user(&conn, "Kofi Boateng", UserRole::Athlete).await;
    let token = |user: &users::Model| encode_data(&config, AuthUser::from(user)).unwrap();
    let (admin_token, athlete_token, other_token) = (token(&admin), token(&athlete), token(&other));

    let tournament = insert_tournament(&conn, "Summer Cup").await;
    let scheduled = create_match(
        &conn,
        CreateMatchParams {
            tournament_id: tournament.id,
            team1: "Lions".to_string(),
            team2: "Eagles".to_string(),
            round: None,
            start_time: None,
            venue: None,
        },
    )
    .await
    .unwrap();

    let router = setup_router(config.clone(), conn).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let served = router.clone();
    tokio::spawn(async move { axum::serve(listener, served).await });

    let mut joined = connect(addr, &athlete_token).await;
    let mut outsider = connect(addr, &other_token).await;

    emit(&mut joined, "join_room", json!(athlete.id)).await;
    let (event, data) = next_event(&mut joined).await;
    assert_eq!(event, "join_room:success");
    assert_eq!(data["room"], format!("user_{}", athlete.id));

    emit(&mut outsider, "join_room", json!(athlete.id)).await;
    let (event, _) = next_event(&mut outsider).await;
    assert_eq!(event, "join_room:failure");

    let (status, _) = call(
        &router,
        Method::POST,
        "/notifications/send",
        Some(&admin_token),
        Some(json!({ "userId": athlete.id, "message": "Bring your ID" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (event, data) = next_event(&mut joined).await;
    assert_eq!(event, "new_notification");
    assert_eq!(data["message"], "Bring your ID");

    let (status, _) = call(
        &router,
        Method::POST,
        "/matches/update-score",
        Some(&admin_token),
        Some(json!({ "matchId": scheduled.id, "score1": 2, "score2": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let expected = json!({ "matchId": scheduled.id, "score1": 2, "score2": 1 });
    assert_eq!(next_event(&mut joined).await, ("score_updated".to_string(), expected.clone()));
    // The notification went to the room only, so the broadcast is the first
    // thing the outsider sees.
    assert_eq!(next_event(&mut outsider).await, ("score_updated".to_string(), expected));
}
