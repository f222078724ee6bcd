use std::fs;

use tempfile::tempdir;

use listing_board::{InMemoryListingStore, ListingService, LogMailer};

use crate::support::start_with;

#[tokio::test]
async fn unmatched_paths_fall_back_to_static_dir() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>Listing board</h1>").unwrap();

    let base = start_with(
        ListingService::new(InMemoryListingStore::new()),
        LogMailer::new(),
        Some(dir.path()),
    )
    .await;

    let resp = reqwest::get(format!("{base}/index.html")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "<h1>Listing board</h1>");

    // API routes still win over the fallback
    let resp = reqwest::get(format!("{base}/listings")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "[]");

    let resp = reqwest::get(format!("{base}/missing.css")).await.unwrap();
    assert_eq!(resp.status(), 404);
}
