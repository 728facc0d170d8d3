use axum::http::{header::AUTHORIZATION, request::Parts};
use socketioxide::{
    SocketIo,
    extract::{Data, SocketRef},
};
use tracing::info;

use app::{config::Config, utils::decode_data};
use models::schemas::{live::JOIN_ROOM, user::AuthUser};

use super::handlers::handle_join_room;

/// Mounts the realtime handlers on the default namespace.
///
/// The caller is identified once, from the handshake: a `Bearer` token in the
/// `Authorization` header or a `token` query parameter.
pub fn register_live_namespace(io: &SocketIo, config: Config) {
    io.ns("/", move |socket: SocketRef| on_connect(socket, &config));
}

fn on_connect(socket: SocketRef, config: &Config) {
    let caller = handshake_token(socket.req_parts())
        .and_then(|token| decode_data::<AuthUser>(config, &token).ok());

    info!(
        socket_id = %socket.id,
        user_id = ?caller.as_ref().map(|user| user.id),
        "Socket connected"
    );

    socket.on(
        JOIN_ROOM,
        move |socket: SocketRef, data: Data<serde_json::Value>| {
            handle_join_room(&socket, caller.as_ref(), &data.0);
        },
    );

    socket.on_disconnect(|socket: SocketRef| {
        info!(socket_id = %socket.id, "Socket disconnected");
    });
}

fn handshake_token(parts: &Parts) -> Option<String> {
    let from_header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::to_string);

    from_header.or_else(|| {
        let query = parts.uri.query()?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "token")
            .map(|(_, value)| value.into_owned())
    })
}
