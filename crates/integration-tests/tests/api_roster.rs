//! Integration tests for the roster and login API.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use mockup_studio_integration_tests::{
    TEST_ADMIN_PASSWORD, TestContext, get, json_body, post_json,
};

async fn create_user(ctx: &TestContext, username: &str, password: &str) -> StatusCode {
    let response = ctx
        .send(post_json(
            "/api/users",
            &json!({ "username": username, "password": password }),
        ))
        .await;
    response.status()
}

async fn login(ctx: &TestContext, username: &str, password: &str) -> (StatusCode, serde_json::Value) {
    let response = ctx
        .send(post_json(
            "/api/login",
            &json!({ "username": username, "password": password }),
        ))
        .await;
    let status = response.status();
    (status, json_body(response).await)
}

// ============================================================================
// User Creation
// ============================================================================

#[tokio::test]
async fn test_create_user_never_exposes_password() {
    let ctx = TestContext::new();
    let response = ctx
        .send(post_json(
            "/api/users",
            &json!({ "username": "alice", "password": "secret" }),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["username"], "alice");
    assert!(body.get("password").is_none());

    let listed = json_body(ctx.send(get("/api/users")).await).await;
    assert_eq!(listed, json!([{ "username": "alice" }]));
}

#[tokio::test]
async fn test_create_user_rejects_reserved_admin_name() {
    let ctx = TestContext::new();
    for name in ["admin", "ADMIN", "  Admin  "] {
        assert_eq!(
            create_user(&ctx, name, "secret").await,
            StatusCode::BAD_REQUEST,
            "{name} must be reserved"
        );
    }

    let listed = json_body(ctx.send(get("/api/users")).await).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_user_rejects_duplicates() {
    let ctx = TestContext::new();
    assert_eq!(create_user(&ctx, "alice", "one").await, StatusCode::CREATED);
    assert_eq!(
        create_user(&ctx, "alice", "two").await,
        StatusCode::CONFLICT
    );

    let listed = json_body(ctx.send(get("/api/users")).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_user_rejects_blank_fields() {
    let ctx = TestContext::new();
    assert_eq!(create_user(&ctx, "  ", "secret").await, StatusCode::BAD_REQUEST);
    assert_eq!(create_user(&ctx, "alice", "   ").await, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_admin_login_works_with_empty_roster() {
    let ctx = TestContext::new();
    let (status, body) = login(&ctx, "admin", TEST_ADMIN_PASSWORD).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "ADMIN");
}

#[tokio::test]
async fn test_roster_user_login_grants_user_role() {
    let ctx = TestContext::new();
    create_user(&ctx, "alice", "hunter2").await;

    let (status, body) = login(&ctx, "alice", "hunter2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "USER");
}

#[tokio::test]
async fn test_login_rejects_bad_credentials_uniformly() {
    let ctx = TestContext::new();
    create_user(&ctx, "alice", "hunter2").await;

    // Wrong password and unknown user produce the same response
    let (wrong_status, wrong_body) = login(&ctx, "alice", "nope").await;
    let (unknown_status, unknown_body) = login(&ctx, "mallory", "nope").await;
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn test_admin_password_does_not_unlock_roster_users() {
    let ctx = TestContext::new();
    create_user(&ctx, "alice", "hunter2").await;

    let (status, _) = login(&ctx, "alice", TEST_ADMIN_PASSWORD).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
