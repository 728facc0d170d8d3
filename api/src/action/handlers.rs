use serde_json::{Value, json};
use socketioxide::extract::SocketRef;
use tracing::{info, warn};

use app::core::broadcast::{may_join, user_room};
use models::schemas::user::AuthUser;

const JOIN_SUCCESS: &str = "join_room:success";
const JOIN_FAILURE: &str = "join_room:failure";

/// Subscribes the connection to a user's room when the caller owns it or is
/// an admin. The outcome is echoed back to the connection.
pub fn handle_join_room(socket: &SocketRef, caller: Option<&AuthUser>, data: &Value) {
    let Some(user_id) = parse_user_id(data) else {
        warn!(socket_id = %socket.id, payload = %data, "join_room without a user id");
        reply(socket, JOIN_FAILURE, json!({ "message": "userId is required" }));
        return;
    };

    if !may_join(caller, user_id) {
        warn!(socket_id = %socket.id, user_id, "join_room refused");
        reply(socket, JOIN_FAILURE, json!({ "message": "access denied" }));
        return;
    }

    let room = user_room(user_id);
    socket.join(room.clone());
    info!(socket_id = %socket.id, room = %room, "Joined room");
    reply(socket, JOIN_SUCCESS, json!({ "room": room }));
}

fn reply(socket: &SocketRef, event: &'static str, payload: Value) {
    if let Err(e) = socket.emit(event, &payload) {
        warn!(socket_id = %socket.id, event, error = %e, "Failed to reply");
    }
}

/// Clients send the id either as a number or as its decimal string.
fn parse_user_id(data: &Value) -> Option<i32> {
    match data {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        Value::Array(items) => items.first().and_then(parse_user_id),
        _ => None,
    }
}
