//! Helpers for driving the router in tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::api;
use crate::app::App;
use crate::infrastructure::sqlite::SqliteRepositories;
use crate::test_fixtures::memory_pool;

/// A well-formed identifier that no test ever assigns.
pub const UNASSIGNED_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

/// In-process client over a fresh database.
#[derive(Clone)]
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub async fn new() -> Self {
        let app = Arc::new(App::new(SqliteRepositories::new(memory_pool().await)));
        Self {
            router: api::http::routes().with_state(app),
        }
    }

    /// Send a request and decode the body as JSON (`Null` when empty).
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Create a creature and return its id.
    pub async fn create_creature(&self, name: &str, species: &str) -> String {
        let (status, body) = self
            .post("/creatures/", json!({ "name": name, "species": species }))
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        id_of(&body)
    }

    /// Create a realm and return its id.
    pub async fn create_realm(&self, name: &str) -> String {
        let (status, body) = self.post("/realms/", json!({ "name": name })).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        id_of(&body)
    }

    pub async fn join(&self, creature_id: &str, realm_id: &str) -> StatusCode {
        self.post(
            "/memberships/",
            json!({ "creature_id": creature_id, "realm_id": realm_id }),
        )
        .await
        .0
    }
}

pub fn id_of(body: &Value) -> String {
    body["id"].as_str().expect("id field").to_string()
}

pub fn detail_of(body: &Value) -> &str {
    body["detail"].as_str().expect("detail field")
}
