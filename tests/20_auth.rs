mod common;

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{TestServer, ADMIN, PASSWORD};
use portfolio_api::auth::TokenService;

#[tokio::test]
async fn setup_then_login_issues_token() -> Result<()> {
    let server = TestServer::spawn().await?;

    let res = server.setup_admin(ADMIN, PASSWORD).await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await?;
    assert!(body["message"].is_string());

    let res = server.login(ADMIN, PASSWORD).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert!(!body["token"].as_str().unwrap_or_default().is_empty());
    Ok(())
}

#[tokio::test]
async fn duplicate_setup_is_conflict() -> Result<()> {
    let server = TestServer::spawn().await?;

    assert_eq!(server.setup_admin(ADMIN, PASSWORD).await?.status(), StatusCode::CREATED);

    let res = server.setup_admin(ADMIN, "another").await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // The original password still works
    assert_eq!(server.login(ADMIN, PASSWORD).await?.status(), StatusCode::OK);
    assert_eq!(server.login(ADMIN, "another").await?.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn setup_requires_username_and_password() -> Result<()> {
    let server = TestServer::spawn().await?;

    let res = server
        .client
        .post(server.url("/api/setup-admin"))
        .json(&json!({ "username": "admin" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert!(body["field_errors"]["password"].is_string());

    assert_eq!(server.setup_admin("", "pw").await?.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn login_requires_username_and_password() -> Result<()> {
    let server = TestServer::spawn().await?;
    server.setup_admin(ADMIN, PASSWORD).await?;

    for (body, missing) in [
        (json!({}), "username"),
        (json!({ "username": ADMIN }), "password"),
        (json!({ "password": PASSWORD }), "username"),
    ] {
        let res = server
            .client
            .post(server.url("/api/login"))
            .json(&body)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{}", body);

        let body: Value = res.json().await?;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["field_errors"][missing].is_string());
    }
    Ok(())
}

#[tokio::test]
async fn bad_credentials_are_unauthorized() -> Result<()> {
    let server = TestServer::spawn().await?;
    server.setup_admin(ADMIN, PASSWORD).await?;

    let res = server.login(ADMIN, "wrong").await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await?;
    assert!(body["error"].is_string());

    // Unknown user looks the same as a wrong password
    let res = server.login("nobody", PASSWORD).await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn protected_routes_reject_missing_token() -> Result<()> {
    let server = TestServer::spawn().await?;
    let client = &server.client;

    let requests = [
        client.post(server.url("/api/blog")).json(&json!({"title": "t", "content": "c"})),
        client.put(server.url("/api/blog/1")).json(&json!({"title": "t"})),
        client.delete(server.url("/api/blog/1")),
        client.post(server.url("/api/projects")).json(&json!({"title": "t", "description": "d"})),
        client.put(server.url("/api/projects/1")).json(&json!({"title": "t"})),
        client.delete(server.url("/api/projects/1")),
        client.post(server.url("/api/about")).json(&json!({"name": "n"})),
        client.post(server.url("/api/contact")).json(&json!({"email": "e"})),
        client.get(server.url("/api/export")),
        client.post(server.url("/api/import")).json(&json!({"blog": []})),
    ];

    for request in requests {
        let res = request.send().await?;
        assert_eq!(res.status(), StatusCode::FORBIDDEN, "{}", res.url());
    }

    // Nothing was written
    assert_eq!(server.get_json("/api/blog").await?, json!([]));
    assert_eq!(server.get_json("/api/projects").await?, json!([]));
    assert_eq!(server.get_json("/api/about").await?, json!({}));
    assert_eq!(server.get_json("/api/contact").await?, json!({}));
    Ok(())
}

#[tokio::test]
async fn malformed_authorization_header_is_forbidden() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.admin_token().await?;

    for header in [token.clone(), format!("Basic {}", token), "Bearer not-a-jwt".to_string()] {
        let res = server
            .client
            .get(server.url("/api/export"))
            .header("Authorization", header)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }
    Ok(())
}

#[tokio::test]
async fn token_signed_with_another_secret_is_forbidden() -> Result<()> {
    let server = TestServer::spawn().await?;
    server.admin_token().await?;

    let forged = TokenService::new("some-other-secret", chrono::Duration::hours(1)).issue(ADMIN, Utc::now())?;
    let res = server
        .client
        .get(server.url("/api/export"))
        .bearer_auth(forged)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn token_for_unknown_admin_is_forbidden() -> Result<()> {
    let server = TestServer::spawn().await?;

    // Correct secret, but no such administrator was ever created
    let token = TokenService::new(common::SECRET, chrono::Duration::hours(1)).issue("ghost", Utc::now())?;
    let res = server
        .client
        .get(server.url("/api/export"))
        .bearer_auth(token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn expired_token_is_forbidden() -> Result<()> {
    let mut config = common::test_config();
    config.security.jwt_expiry_secs = 2;
    let server = TestServer::spawn_with(config).await?;
    let token = server.admin_token().await?;

    let res = server.client.get(server.url("/api/export")).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    tokio::time::sleep(Duration::from_millis(2200)).await;

    let res = server.client.get(server.url("/api/export")).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}
