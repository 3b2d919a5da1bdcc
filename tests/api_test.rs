//! End-to-end API tests against an in-memory SQLite database.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{app, app_with, config, register_and_login, send, send_raw};
use erp_api::config::ResourcePolicy;

// =============================================================================
// Envelope & infrastructure
// =============================================================================

#[tokio::test]
async fn test_root_and_health() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
    assert_eq!(body["error"], false);
    assert!(body["data"].is_null());

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["database"], "up");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/company/create"].is_object());
}

#[tokio::test]
async fn test_invalid_ids_rejected() {
    let app = app().await;

    for uri in ["/company/abc", "/company/0", "/positions/-4"] {
        let (status, body) = send(&app, Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["message"], "invalid or missing ID parameter");
        assert_eq!(body["error"], true);
    }
}

#[tokio::test]
async fn test_empty_lists_are_not_found() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/company", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "company not found");

    let (status, body) = send(&app, Method::GET, "/positions/deleted", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "position not found");
}

// =============================================================================
// Users & authentication
// =============================================================================

#[tokio::test]
async fn test_user_email_reusable_after_delete() {
    let app = app().await;
    let credentials = json!({ "email": "a@x.com", "password": "secret1" });

    let (status, body) =
        send(&app, Method::POST, "/users/register", Some(credentials.clone()), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], 201);
    let id = body["data"]["id"].as_i64().unwrap();
    assert_ne!(id, 0);
    assert_eq!(body["data"]["role"], "user");
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());

    let (status, body) =
        send(&app, Method::POST, "/users/register", Some(credentials.clone()), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "user already exists");

    let (status, body) = send(&app, Method::POST, "/users/login", Some(credentials.clone()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["token_type"], "Bearer");
    assert_eq!(body["data"]["expires_in"], 3600);
    let token = body["data"]["access_token"].as_str().unwrap().to_string();

    let (status, body) =
        send(&app, Method::DELETE, &format!("/users/{id}"), None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "a@x.com");

    let (status, body) = send(&app, Method::POST, "/users/register", Some(credentials), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(body["data"]["id"].as_i64().unwrap(), id);
}

#[tokio::test]
async fn test_register_validation() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users/register",
        Some(json!({ "email": "a@x.com", "password": "12345" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "password must be at least 6 characters");

    let (status, _) = send(
        &app,
        Method::POST,
        "/users/register",
        Some(json!({ "email": "not-an-email", "password": "secret1" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = send(
        &app,
        Method::POST,
        "/users/register",
        Some(json!({ "email": "a@x.com" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid request body");

    let (status, body) = send_raw(&app, Method::POST, "/users/register", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid request body");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = app().await;
    register_and_login(&app, "b@x.com", "secret1").await;

    let (wrong_status, wrong_body) = send(
        &app,
        Method::POST,
        "/users/login",
        Some(json!({ "email": "b@x.com", "password": "wrong-password" })),
        None,
    )
    .await;
    let (unknown_status, unknown_body) = send(
        &app,
        Method::POST,
        "/users/login",
        Some(json!({ "email": "nobody@x.com", "password": "secret1" })),
        None,
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body["message"], unknown_body["message"]);
}

#[tokio::test]
async fn test_user_routes_require_token() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/users", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], true);

    let (status, _) = send(&app, Method::GET, "/users", None, Some("garbage")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = register_and_login(&app, "c@x.com", "secret1").await;
    let (status, body) = send(&app, Method::GET, "/users", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_user_routes_open_when_policy_allows() {
    let mut config = config();
    config.users = ResourcePolicy {
        require_auth: false,
        ..ResourcePolicy::USERS
    };
    let app = app_with(config).await;

    let (status, _) = send(&app, Method::GET, "/users", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_update_rehashes_and_keeps_omitted_fields() {
    let app = app().await;
    let token = register_and_login(&app, "d@x.com", "secret1").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane@x.com",
            "password": "secret1",
            "role": "staff",
            "phone_number": "555-0100",
            "position_name": "Engineer",
            "company": "Acme"
        })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/users/{id}"),
        Some(json!({ "email": "jane@x.com", "password": "changed1", "last_name": "" })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["last_name"], "Doe");
    assert_eq!(body["data"]["role"], "staff");

    let (status, _) = send(
        &app,
        Method::POST,
        "/users/login",
        Some(json!({ "email": "jane@x.com", "password": "changed1" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // every update must carry a credential that passes the length rule
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/users/{id}"),
        Some(json!({ "email": "jane@x.com", "first_name": "J" })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/users/{id}"),
        Some(json!({ "email": "jane@x.com", "password": "short" })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/users/{id}"),
        Some(json!({ "email": "d@x.com", "password": "secret1" })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "user already exists");
}

// =============================================================================
// Companies
// =============================================================================

#[tokio::test]
async fn test_company_soft_delete_and_restore() {
    let app = app().await;
    let acme = json!({ "company_name": "Acme" });

    let (status, body) = send(&app, Method::POST, "/company/create", Some(acme.clone()), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "company created successfully");
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::POST, "/company/create", Some(acme.clone()), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "company already exists");

    let (status, body) =
        send(&app, Method::DELETE, &format!("/company/delete/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["company_name"], "Acme");

    let (status, _) = send(&app, Method::GET, &format!("/company/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::POST, "/company/create", Some(acme), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "company already exists in soft deleted");

    let (status, body) = send(&app, Method::GET, "/company/deleted", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"].as_i64(), Some(id));

    let (status, _) = send(&app, Method::PUT, &format!("/company/restore/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/company", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["company_name"], "Acme");

    let (status, _) = send(&app, Method::PUT, "/company/restore/9999", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_company_rename_conflicts() {
    let app = app().await;

    for name in ["Acme", "Globex"] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/company/create",
            Some(json!({ "company_name": name })),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, _) = send(
        &app,
        Method::PUT,
        "/company/update/1",
        Some(json!({ "company_name": "Globex" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/company/update/1",
        Some(json!({ "company_name": "Acme" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["company_name"], "Acme");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/company/update/77",
        Some(json!({ "company_name": "Initech" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/company/create",
        Some(json!({ "company_name": "" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_company_in_use_cannot_be_deleted() {
    let app = app().await;
    let token = register_and_login(&app, "admin@x.com", "secret1").await;

    let (_, body) = send(
        &app,
        Method::POST,
        "/company/create",
        Some(json!({ "company_name": "Acme" })),
        None,
    )
    .await;
    let company_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane@x.com",
            "password": "secret1",
            "role": "staff",
            "phone_number": "555-0100",
            "position_name": "Engineer",
            "company": "Acme",
            "company_id": company_id
        })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let user_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) =
        send(&app, Method::DELETE, &format!("/company/delete/{company_id}"), None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "company is still in use by user");

    let (status, _) =
        send(&app, Method::DELETE, &format!("/users/{user_id}"), None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) =
        send(&app, Method::DELETE, &format!("/company/delete/{company_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, &format!("/company/{company_id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_company_restore_into_active_name_conflicts() {
    let mut config = config();
    config.companies = ResourcePolicy {
        reserve_deleted_keys: false,
        ..ResourcePolicy::COMPANIES
    };
    let app = app_with(config).await;
    let acme = json!({ "company_name": "Acme" });

    let (status, _) = send(&app, Method::POST, "/company/create", Some(acme.clone()), None).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(&app, Method::DELETE, "/company/delete/1", None, None).await;
    assert_eq!(status, StatusCode::OK);

    // the deleted name is free again under this policy
    let (status, body) = send(&app, Method::POST, "/company/create", Some(acme), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 2);

    let (status, body) = send(&app, Method::PUT, "/company/restore/1", None, None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "company already exists");

    let (status, body) = send(&app, Method::GET, "/company/deleted", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], 1);
}

// =============================================================================
// Positions
// =============================================================================

#[tokio::test]
async fn test_position_conflicts_on_either_field() {
    let app = app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/positions/create",
        Some(json!({ "position_name": "Engineer", "position_code": "ENG" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    for (name, code) in [("Engineer", "ENG-2"), ("Designer", "ENG")] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/positions/create",
            Some(json!({ "position_name": name, "position_code": code })),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "position already exists");
    }
}

#[tokio::test]
async fn test_position_partial_update() {
    let app = app().await;

    for (name, code) in [("Engineer", "ENG"), ("Designer", "DES")] {
        send(
            &app,
            Method::POST,
            "/positions/create",
            Some(json!({ "position_name": name, "position_code": code })),
            None,
        )
        .await;
    }

    let (status, body) = send(
        &app,
        Method::PUT,
        "/positions/update/1",
        Some(json!({ "position_code": "ENG-SR" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["position_name"], "Engineer");
    assert_eq!(body["data"]["position_code"], "ENG-SR");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/positions/update/1",
        Some(json!({ "position_code": "DES" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_position_soft_delete_reserves_keys_without_restore() {
    let app = app().await;

    send(
        &app,
        Method::POST,
        "/positions/create",
        Some(json!({ "position_name": "Engineer", "position_code": "ENG" })),
        None,
    )
    .await;

    let (status, _) = send(&app, Method::DELETE, "/positions/delete/1", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::POST,
        "/positions/create",
        Some(json!({ "position_name": "Other", "position_code": "ENG" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "position already exists in soft deleted");

    // restore is not mounted for positions by default
    let (status, _) = send(&app, Method::PUT, "/positions/restore/1", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_position_in_use_cannot_be_deleted() {
    let app = app().await;
    let token = register_and_login(&app, "admin@x.com", "secret1").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/positions/create",
        Some(json!({ "position_name": "Engineer", "position_code": "ENG" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let position_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane@x.com",
            "password": "secret1",
            "role": "staff",
            "phone_number": "555-0100",
            "position_name": "Engineer",
            "company": "Acme",
            "position_id": position_id
        })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let user_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) =
        send(&app, Method::DELETE, &format!("/positions/delete/{position_id}"), None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "position is still in use by user");

    let (status, _) = send(&app, Method::GET, &format!("/positions/{position_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) =
        send(&app, Method::DELETE, &format!("/users/{user_id}"), None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) =
        send(&app, Method::DELETE, &format!("/positions/delete/{position_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["position_code"], "ENG");
}
