mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::TestServer;

fn portfolio() -> Value {
    json!({
        "about": { "name": "Ada", "title": "Engineer", "bio": "Builds things", "image_url": "/ada.png" },
        "contact": { "email": "ada@example.com", "linkedin": "in/ada", "github": "gh/ada", "message": "Say hi" },
        "projects": [
            { "id": 1, "title": "Engine", "description": "Analytical", "link": "https://example.com/engine" },
            { "id": 5, "title": "Notes", "description": "On the engine", "link": "" }
        ],
        "blog": [
            { "id": 3, "title": "Hello", "content": "First post" }
        ]
    })
}

#[tokio::test]
async fn import_then_export_round_trips() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.admin_token().await?;

    let res = server
        .client
        .post(server.url("/api/import"))
        .bearer_auth(&token)
        .json(&portfolio())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["blog"], 1);
    assert_eq!(body["projects"], 2);

    let res = server
        .client
        .get(server.url("/api/export"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, portfolio());

    // Public reads see the imported content
    assert_eq!(server.get_json("/api/blog").await?, portfolio()["blog"]);
    Ok(())
}

#[tokio::test]
async fn import_replaces_existing_content() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.admin_token().await?;

    server
        .client
        .post(server.url("/api/blog"))
        .bearer_auth(&token)
        .json(&json!({ "title": "Old", "content": "Gone after import" }))
        .send()
        .await?;

    let res = server
        .client
        .post(server.url("/api/import"))
        .bearer_auth(&token)
        .json(&json!({ "about": { "name": "Only name" }, "projects": [] }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(server.get_json("/api/blog").await?, json!([]));
    assert_eq!(
        server.get_json("/api/about").await?,
        json!({ "name": "Only name", "title": "", "bio": "", "image_url": "" })
    );
    assert_eq!(
        server.get_json("/api/contact").await?,
        json!({ "email": "", "linkedin": "", "github": "", "message": "" })
    );
    Ok(())
}

#[tokio::test]
async fn failed_import_changes_nothing() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.admin_token().await?;

    server
        .client
        .post(server.url("/api/import"))
        .bearer_auth(&token)
        .json(&portfolio())
        .send()
        .await?;

    let mut broken = portfolio();
    broken["about"]["name"] = json!("Someone else");
    broken["blog"] = json!([
        { "id": 7, "title": "a", "content": "a" },
        { "id": 7, "title": "b", "content": "b" }
    ]);

    let res = server
        .client
        .post(server.url("/api/import"))
        .bearer_auth(&token)
        .json(&broken)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let export = server
        .client
        .get(server.url("/api/export"))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(export, portfolio());
    Ok(())
}

#[tokio::test]
async fn invalid_entries_are_rejected_before_writing() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.admin_token().await?;

    let res = server
        .client
        .post(server.url("/api/import"))
        .bearer_auth(&token)
        .json(&json!({ "projects": [{ "title": "No description" }] }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert!(body["field_errors"]["projects[0].description"].is_string());

    assert_eq!(server.get_json("/api/about").await?, json!({}));
    Ok(())
}
