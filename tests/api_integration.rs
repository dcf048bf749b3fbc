//! End-to-end API integration tests
//!
//! These tests drive the full HTTP router against in-memory storage:
//! - User registration and authentication
//! - Repository creation, lookup and deletion
//! - Membership management and the owner guards
//! - JWT authentication on protected endpoints

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use serve_api::api::{self, AppState};
use serve_api::config::Config;
use tower::util::ServiceExt; // for oneshot

/// Setup test application backed by in-memory repositories
fn setup_app() -> Router {
    let config = Config::from_lookup(|key| match key {
        "STORAGE_BACKEND" => Some("memory".to_string()),
        "JWT_SECRET" => Some("integration-test-secret".to_string()),
        "BCRYPT_COST" => Some("4".to_string()),
        _ => None,
    })
    .expect("valid test config");

    api::router(AppState::in_memory(&config))
}

/// Send a request and return status plus parsed JSON body (Null if empty)
async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Register a user and log in, returning (user_id, token)
async fn register_and_login(app: &Router, email: &str) -> (String, String) {
    let (status, _) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "email": email,
            "password": "testpassword123",
            "full_name": "Test User"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": "testpassword123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["last_login"].is_null());

    (
        body["user_id"].as_str().unwrap().to_string(),
        body["token"].as_str().unwrap().to_string(),
    )
}

async fn create_repository(app: &Router, token: &str, name: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/repositories",
        Some(token),
        Some(json!({ "name": name, "description": "Desc" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    body["id"].as_str().unwrap().to_string()
}

async fn invite(app: &Router, token: &str, repo_id: &str, email: &str, role: &str) {
    let (status, _) = send(
        app,
        "POST",
        &format!("/api/repositories/{}/members", repo_id),
        Some(token),
        Some(json!({ "email": email, "role": role })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_register_rejects_duplicates_and_short_passwords() {
    let app = setup_app();
    register_and_login(&app, "dup@serve.dev").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "email": "DUP@serve.dev",
            "password": "anotherpassword",
            "full_name": "Again"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "email": "short@serve.dev",
            "password": "short",
            "full_name": "Short"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_with_wrong_password_fails() {
    let app = setup_app();
    register_and_login(&app, "login@serve.dev").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "login@serve.dev", "password": "wrong-password" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_reports_previous_login() {
    let app = setup_app();
    let credentials = json!({ "email": "again@serve.dev", "password": "testpassword123" });
    register_and_login(&app, "again@serve.dev").await;

    let (status, body) = send(&app, "POST", "/api/auth/login", None, Some(credentials)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["last_login"].is_string());
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = setup_app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/repositories",
        None,
        Some(json!({ "name": "no-auth" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/api/repositories", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_fetch_repository() {
    let app = setup_app();
    let (owner_id, token) = register_and_login(&app, "owner@serve.dev").await;

    let repo_id = create_repository(&app, &token, "serve-core").await;

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/repositories/{}", repo_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "serve-core");
    assert_eq!(body["description"], "Desc");
    assert_eq!(body["owner_id"], owner_id.as_str());

    let (status, body) = send(&app, "GET", "/api/repositories", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_repository_name_conflicts() {
    let app = setup_app();
    let (_, token) = register_and_login(&app, "owner@serve.dev").await;
    let (_, other_token) = register_and_login(&app, "other@serve.dev").await;
    create_repository(&app, &token, "taken").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/repositories",
        Some(&other_token),
        Some(json!({ "name": "taken" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "이미 존재하는 저장소 이름입니다.");

    let (_, owned) = send(&app, "GET", "/api/repositories", Some(&other_token), None).await;
    assert!(owned.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_owner_role_cannot_be_changed() {
    let app = setup_app();
    let (owner_id, owner_token) = register_and_login(&app, "owner@serve.dev").await;
    let (_, admin_token) = register_and_login(&app, "admin@serve.dev").await;
    let repo_id = create_repository(&app, &owner_token, "pinned").await;
    invite(&app, &owner_token, &repo_id, "admin@serve.dev", "ADMIN").await;

    for token in [&owner_token, &admin_token] {
        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/repositories/{}/members/{}/role", repo_id, owner_id),
            Some(token.as_str()),
            Some(json!({ "role": "MEMBER" })),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            body["error"],
            "저장소 소유자(Owner)는 권한을 변경할 수 없습니다. (항상 ADMIN 유지)"
        );
    }
}

#[tokio::test]
async fn test_owner_cannot_be_kicked() {
    let app = setup_app();
    let (owner_id, owner_token) = register_and_login(&app, "owner@serve.dev").await;
    let (_, admin_token) = register_and_login(&app, "another-admin@serve.dev").await;
    let repo_id = create_repository(&app, &owner_token, "unkickable").await;
    invite(&app, &owner_token, &repo_id, "another-admin@serve.dev", "ADMIN").await;

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/repositories/{}/members/{}", repo_id, owner_id),
        Some(&admin_token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "저장소 소유자(Owner)는 강퇴할 수 없습니다.");

    // owner still manages the repository
    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/repositories/{}/members", repo_id),
        Some(&owner_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_member_lifecycle() {
    let app = setup_app();
    let (owner_id, owner_token) = register_and_login(&app, "owner@serve.dev").await;
    let (member_id, member_token) = register_and_login(&app, "member@serve.dev").await;
    let repo_id = create_repository(&app, &owner_token, "lifecycle").await;

    // outsiders cannot see the repository
    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/repositories/{}", repo_id),
        Some(&member_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    invite(&app, &owner_token, &repo_id, "member@serve.dev", "MEMBER").await;

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/repositories/{}/members", repo_id),
        Some(&member_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["user_id"], owner_id.as_str());
    assert_eq!(body[0]["role"], "ADMIN");
    assert_eq!(body[1]["user_id"], member_id.as_str());
    assert_eq!(body[1]["role"], "MEMBER");

    // a plain member cannot promote itself
    let role_uri = format!("/api/repositories/{}/members/{}/role", repo_id, member_id);
    let (status, _) = send(
        &app,
        "PUT",
        &role_uri,
        Some(&member_token),
        Some(json!({ "role": "ADMIN" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        "PUT",
        &role_uri,
        Some(&owner_token),
        Some(json!({ "role": "ADMIN" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "ADMIN");

    let (status, _) = send(
        &app,
        "PUT",
        &role_uri,
        Some(&owner_token),
        Some(json!({ "role": "SUPERUSER" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/repositories/{}/members/{}", repo_id, member_id),
        Some(&owner_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/repositories/{}/members", repo_id),
        Some(&member_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_only_owner_deletes_repository() {
    let app = setup_app();
    let (_, owner_token) = register_and_login(&app, "owner@serve.dev").await;
    let (_, admin_token) = register_and_login(&app, "admin@serve.dev").await;
    let repo_id = create_repository(&app, &owner_token, "deletable").await;
    invite(&app, &owner_token, &repo_id, "admin@serve.dev", "ADMIN").await;

    let uri = format!("/api/repositories/{}", repo_id);

    let (status, _) = send(&app, "DELETE", &uri, Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, "DELETE", &uri, Some(&owner_token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &uri, Some(&owner_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
