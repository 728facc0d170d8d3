use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use api::build_router;
use app::state::AppState;
use app::utils::encode_data;
use models::domains::sea_orm_active_enums::UserRole;
use models::schemas::user::AuthUser;

#[path = "../common/mod.rs"]
mod common;

mod realtime;

use common::{MemoryChannel, insert_user, test_state};

pub(crate) struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub channel: MemoryChannel,
}

impl TestApp {
    pub async fn new() -> Self {
        let (state, channel) = test_state().await;
        let router = build_router(state.clone()).expect("Build router failed!");
        Self {
            router,
            state,
            channel,
        }
    }

    /// Creates an account with `role` and returns it with a bearer token.
    pub async fn user(&self, full_name: &str, role: UserRole) -> (i32, String) {
        let user = insert_user(&self.state.conn, full_name, role).await;
        let token = encode_data(&self.state.config, AuthUser::from(&user)).unwrap();
        (user.id, token)
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        call(&self.router, method, uri, token, body).await
    }
}

/// One request through `router`; the body is parsed as JSON when present.
pub(crate) async fn call(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
