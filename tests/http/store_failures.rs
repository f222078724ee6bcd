use reqwest::Method;
use serde_json::{json, Value};

use listing_board::{InMemoryListingStore, Listing, ListingStore};

use crate::support::{lamp, start_server_failing_writes};

/// A store already holding one listing, and that listing's id.
fn seeded() -> (InMemoryListingStore, String) {
    let store = InMemoryListingStore::new();
    let listing: Listing = serde_json::from_value(json!({
        "id": "1700000000000",
        "title": "Lamp",
        "price": 20,
        "description": "IKEA",
        "contact": "a@b.com",
        "imageUrl": "",
        "likes": 0,
        "sold": false,
        "createdAt": "2023-11-14T22:13:20.000Z"
    }))
    .unwrap();
    store.write(&[listing]).unwrap();
    (store, "1700000000000".to_string())
}

#[tokio::test]
async fn failed_writes_answer_500() {
    let (store, id) = seeded();
    let before = store.document().unwrap();
    let server = start_server_failing_writes(store).await;

    let requests = [
        (Method::POST, "/listings".to_string(), Some(lamp())),
        (Method::POST, format!("/listings/{id}/like"), None),
        (Method::POST, format!("/listings/{id}/buy"), None),
        (Method::DELETE, format!("/listings/{id}"), None),
    ];
    for (method, path, body) in requests {
        let mut request = server.client.request(method.clone(), server.url(&path));
        if let Some(body) = body {
            request = request.json(&body);
        }
        let resp = request.send().await.unwrap();
        assert_eq!(resp.status(), 500, "{method} {path}");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(
            body,
            json!({ "success": false, "message": "Failed to save listings" }),
            "{method} {path}"
        );
    }

    assert_eq!(server.store.document().unwrap(), before);
    let listings = server.listings().await;
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["likes"], 0);
    assert_eq!(listings[0]["sold"], false);
}
