//! End-to-end interaction tests
//!
//! Drives the axum application over HTTP with signed payloads, an in-memory
//! store, and a recording platform client.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use integration_tests::{assert_json, assert_status, fixtures::platform_user, TestServer};
use reqwest::StatusCode;
use serde_json::{json, Value};
use ship_core::traits::ShipStore;
use ship_core::value_objects::UserId;

const ADMIN: &str = integration_tests::helpers::ADMIN_USER_ID;

/// Build a slash-command interaction payload
fn command(name: &str, invoker: &str, options: Value) -> Value {
    json!({
        "type": 2,
        "application_id": "app1",
        "token": format!("tok-{name}-{invoker}"),
        "guild_id": "guild1",
        "data": {"name": name, "options": options},
        "member": {"user": {"id": invoker, "username": "someone"}}
    })
}

fn content_of(payload: &Value) -> &str {
    payload["content"].as_str().unwrap_or_default()
}

// ============================================================================
// Protocol Tests
// ============================================================================

#[tokio::test]
async fn test_handshake_returns_pong() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post_interaction(&json!({"type": 1})).await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"type": 1}));
}

#[tokio::test]
async fn test_bad_signature_is_rejected_with_401() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post_badly_signed(&json!({"type": 1})).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.text().await.unwrap(), "Invalid request signature");
}

#[tokio::test]
async fn test_missing_signature_headers_is_401() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post_unsigned(&json!({"type": 1})).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_correctly_signed_garbage_is_400() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = b"not json at all".to_vec();
    let timestamp = "1700000000";
    let signature = server.sign(timestamp, &body);

    let response = server
        .client
        .post(format!("{}/interactions", server.base_url()))
        .header("x-signature-ed25519", signature)
        .header("x-signature-timestamp", timestamp)
        .body(body)
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_unknown_command_gets_fallback_reply() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_interaction(&command("frobnicate", "1", json!([])))
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["type"], 4);
    assert_eq!(
        body["data"]["content"],
        "Sorry, I don't recognize that command."
    );
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Authorization Tests
// ============================================================================

#[tokio::test]
async fn test_non_admin_createship_is_denied_and_creates_nothing() {
    let server = TestServer::start().await.expect("Failed to start server");

    let options = json!([
        {"name": "action", "value": "add"},
        {"name": "user1", "value": "1"},
        {"name": "user2", "value": "2"},
        {"name": "name", "value": "Annbob"}
    ]);
    let response = server
        .post_interaction(&command("createship", "1", options))
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();

    // Denial is an immediate, normal response, not a deferral or an error
    assert_eq!(body["type"], 4);
    assert_eq!(
        body["data"]["content"],
        "🚫 You are not allowed to manage ships."
    );
    assert!(server.store.find_by_name("Annbob").await.unwrap().is_none());
}

#[tokio::test]
async fn test_non_admin_edit_ship_count_is_denied() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .store
        .create(&UserId::new("1"), &UserId::new("2"), "Annbob")
        .await
        .unwrap();

    let options = json!([
        {"name": "name", "value": "Annbob"},
        {"name": "support", "value": 50}
    ]);
    let response = server
        .post_interaction(&command("edit_ship_count", "1", options))
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["type"], 4);

    let ship = server.store.find_by_name("Annbob").await.unwrap().unwrap();
    assert_eq!(ship.support_count, 0);
}

// ============================================================================
// Deferred Command Tests
// ============================================================================

#[tokio::test]
async fn test_admin_createship_defers_then_delivers_follow_up() {
    let server = TestServer::start().await.expect("Failed to start server");

    let options = json!([
        {"name": "action", "value": "add"},
        {"name": "user1", "value": "1"},
        {"name": "user2", "value": "2"},
        {"name": "name", "value": "Annbob"}
    ]);
    let response = server
        .post_interaction(&command("createship", ADMIN, options))
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"type": 5}));

    let edits = server.platform.wait_for_edits(1).await;
    assert_eq!(edits[0].application_id, "app1");
    assert_eq!(content_of(&edits[0].payload), "💞 Ship **Annbob** created!");
    assert!(server.store.find_by_name("annbob").await.unwrap().is_some());
}

#[tokio::test]
async fn test_duplicate_name_is_rejected_case_insensitively() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .store
        .create(&UserId::new("1"), &UserId::new("2"), "Foo")
        .await
        .unwrap();

    let options = json!([
        {"name": "action", "value": "add"},
        {"name": "user1", "value": "1"},
        {"name": "user2", "value": "2"},
        {"name": "name", "value": "foo"}
    ]);
    server
        .post_interaction(&command("createship", ADMIN, options))
        .await
        .unwrap();

    let edits = server.platform.wait_for_edits(1).await;
    assert_eq!(
        content_of(&edits[0].payload),
        "❌ A ship named **foo** already exists."
    );
}

#[tokio::test]
async fn test_rename_of_missing_pair_reports_and_changes_nothing() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .store
        .create(&UserId::new("1"), &UserId::new("2"), "Annbob")
        .await
        .unwrap();

    let options = json!([
        {"name": "action", "value": "edit"},
        {"name": "user1", "value": "1"},
        {"name": "user2", "value": "404"},
        {"name": "name", "value": "Renamed"}
    ]);
    server
        .post_interaction(&command("editship", ADMIN, options))
        .await
        .unwrap();

    let edits = server.platform.wait_for_edits(1).await;
    assert_eq!(
        content_of(&edits[0].payload),
        "❌ Those two aren't shipped yet."
    );
    assert!(server.store.find_by_name("Annbob").await.unwrap().is_some());
    assert!(server.store.find_by_name("Renamed").await.unwrap().is_none());
}

#[tokio::test]
async fn test_support_flow_reports_incremented_counts() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .store
        .create(&UserId::new("1"), &UserId::new("2"), "Annbob")
        .await
        .unwrap();

    let options = json!([{"name": "name", "value": "Annbob"}]);
    server
        .post_interaction(&command("support", "1", options.clone()))
        .await
        .unwrap();
    let edits = server.platform.wait_for_edits(1).await;
    assert_eq!(
        content_of(&edits[0].payload),
        "💖 **Annbob** now has **1** supports!"
    );

    server
        .post_interaction(&command("support", "2", options))
        .await
        .unwrap();
    let edits = server.platform.wait_for_edits(2).await;
    assert_eq!(
        content_of(&edits[1].payload),
        "💖 **Annbob** now has **2** supports!"
    );
}

#[tokio::test]
async fn test_concurrent_support_increments_lose_nothing() {
    let server = TestServer::start().await.expect("Failed to start server");
    let store = server.store.clone();
    store
        .create(&UserId::new("1"), &UserId::new("2"), "Annbob")
        .await
        .unwrap();

    const VOTERS: usize = 25;
    let mut handles = Vec::with_capacity(VOTERS);
    for _ in 0..VOTERS {
        let store: Arc<integration_tests::MemoryShipStore> = store.clone();
        handles.push(tokio::spawn(async move {
            store.increment_support("Annbob").await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let ship = store.find_by_name("Annbob").await.unwrap().unwrap();
    assert_eq!(ship.support_count, VOTERS as i64);
}

#[tokio::test]
async fn test_admin_can_override_support_count() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .store
        .create(&UserId::new("1"), &UserId::new("2"), "Annbob")
        .await
        .unwrap();

    let options = json!([
        {"name": "name", "value": "Annbob"},
        {"name": "support", "value": 123}
    ]);
    server
        .post_interaction(&command("edit_ship_count", ADMIN, options))
        .await
        .unwrap();

    let edits = server.platform.wait_for_edits(1).await;
    assert_eq!(
        content_of(&edits[0].payload),
        "🔧 **Annbob** support count set to **123**."
    );
    let ship = server.store.find_by_name("Annbob").await.unwrap().unwrap();
    assert_eq!(ship.support_count, 123);
}

#[tokio::test]
async fn test_empty_leaderboard_has_distinct_message() {
    let server = TestServer::start().await.expect("Failed to start server");

    server
        .post_interaction(&command("leaderboard", "1", json!([])))
        .await
        .unwrap();

    let edits = server.platform.wait_for_edits(1).await;
    assert!(content_of(&edits[0].payload).starts_with("No ships found"));
    assert!(edits[0].payload.get("embeds").is_none());
}

#[tokio::test]
async fn test_leaderboard_ranks_descending_with_insertion_tiebreak() {
    let server = TestServer::start().await.expect("Failed to start server");
    let store = &server.store;
    store
        .create(&UserId::new("1"), &UserId::new("2"), "Early")
        .await
        .unwrap();
    store
        .create(&UserId::new("1"), &UserId::new("3"), "Tied")
        .await
        .unwrap();
    store
        .create(&UserId::new("2"), &UserId::new("3"), "Top")
        .await
        .unwrap();
    store.set_support("Top", 9).await.unwrap();

    server
        .post_interaction(&command("leaderboard", "1", json!([])))
        .await
        .unwrap();

    let edits = server.platform.wait_for_edits(1).await;
    let description = edits[0].payload["embeds"][0]["description"]
        .as_str()
        .unwrap();
    let lines: Vec<&str> = description.lines().collect();
    assert_eq!(lines[0], "**1.** Top — 9 supports");
    // Early and Tied are tied at zero; insertion order breaks the tie
    assert_eq!(lines[1], "**2.** Early — 0 supports");
    assert_eq!(lines[2], "**3.** Tied — 0 supports");
}

#[tokio::test]
async fn test_ship_command_delivers_result_embed() {
    let server = TestServer::start().await.expect("Failed to start server");

    let options = json!([
        {"name": "user1", "value": "1"},
        {"name": "user2", "value": "2"}
    ]);
    let response = server
        .post_interaction(&command("ship", "1", options))
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"type": 5}));

    let edits = server.platform.wait_for_edits(1).await;
    let embed = &edits[0].payload["embeds"][0];
    assert_eq!(embed["title"], "💞 Ship Result 💞");
    assert_eq!(embed["fields"][0]["value"], "Ann + Bob");
}

#[tokio::test]
async fn test_ship_with_unresolvable_user_reports_fetch_failure() {
    let server = TestServer::start().await.expect("Failed to start server");

    let options = json!([
        {"name": "user1", "value": "1"},
        {"name": "user2", "value": "404"}
    ]);
    server
        .post_interaction(&command("ship", "1", options))
        .await
        .unwrap();

    let edits = server.platform.wait_for_edits(1).await;
    assert_eq!(
        content_of(&edits[0].payload),
        "❌ Failed to fetch user information."
    );
}

#[tokio::test]
async fn test_randomship_excludes_bots() {
    let server = TestServer::start_with_roster(vec![
        platform_user("1", "Ann", false),
        platform_user("2", "Bob", false),
        platform_user("3", "Beep", true),
    ])
    .await
    .expect("Failed to start server");

    server
        .post_interaction(&command("randomship", "1", json!([])))
        .await
        .unwrap();

    let edits = server.platform.wait_for_edits(1).await;
    let embed = &edits[0].payload["embeds"][0];
    assert_eq!(embed["title"], "💞 Ship Result 💞");
    let couple = embed["fields"][0]["value"].as_str().unwrap();
    assert!(!couple.contains("Beep"), "bots must never be shipped");
}

#[tokio::test]
async fn test_randomship_with_one_human_reports_not_enough_members() {
    let server = TestServer::start_with_roster(vec![
        platform_user("1", "Ann", false),
        platform_user("3", "Beep", true),
    ])
    .await
    .expect("Failed to start server");

    server
        .post_interaction(&command("randomship", "1", json!([])))
        .await
        .unwrap();

    let edits = server.platform.wait_for_edits(1).await;
    assert_eq!(content_of(&edits[0].payload), "❌ Not enough members to ship.");
}
