//! Shared setup for integration tests: an in-memory SQLite database with
//! migrations applied, and a router wired over it.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{ConnectOptions, DatabaseConnection};
use serde_json::Value;
use tower::ServiceExt;

use erp_api::api::{create_router, AppState};
use erp_api::config::Config;
use erp_api::infra::Database;

pub const TEST_SECRET: &str = "integration-test-secret-with-32-plus-chars";

/// One pooled connection so every query sees the same in-memory database.
pub async fn database() -> Database {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let connection: DatabaseConnection = sea_orm::Database::connect(options)
        .await
        .expect("sqlite connection");
    let database = Database::from_connection(connection);
    database.run_migrations().await.expect("migrations");
    database
}

pub fn config() -> Config {
    Config::new("sqlite::memory:", TEST_SECRET)
}

pub async fn app() -> Router {
    app_with(config()).await
}

pub async fn app_with(config: Config) -> Router {
    let database = Arc::new(database().await);
    create_router(AppState::from_config(database, config))
}

/// Send a request and decode the envelope.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Send a raw body (for malformed JSON cases).
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

/// Register `email` and log in, returning the access token.
pub async fn register_and_login(app: &Router, email: &str, password: &str) -> String {
    let credentials = serde_json::json!({ "email": email, "password": password });

    let (status, _) = send(app, Method::POST, "/users/register", Some(credentials.clone()), None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(app, Method::POST, "/users/login", Some(credentials), None).await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["access_token"]
        .as_str()
        .expect("access token")
        .to_string()
}
