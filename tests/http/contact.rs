use serde_json::{json, Value};

use listing_board::{InMemoryListingStore, ListingService};

use crate::support::{start_server, start_with, FailingMailer};

#[tokio::test]
async fn contact_is_relayed() {
    let server = start_server().await;

    let resp = server
        .client
        .post(server.url("/contact"))
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Is the lamp still available?"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "success": true, "message": "Message sent" }));

    let outbox = server.outbox.lock().unwrap();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].email, "ada@example.com");
}

#[tokio::test]
async fn contact_missing_field_is_400() {
    let server = start_server().await;

    let resp = server
        .client
        .post(server.url("/contact"))
        .json(&json!({ "name": "Ada", "message": "hi" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(server.outbox.lock().unwrap().is_empty());
}

#[tokio::test]
async fn relay_failure_is_500() {
    let base = start_with(
        ListingService::new(InMemoryListingStore::new()),
        FailingMailer,
        None,
    )
    .await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/contact"))
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "hello"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "success": false, "message": "Failed to send message" })
    );
}
