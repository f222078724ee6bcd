//! Shared helpers: server startup and request bodies.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use listing_board::http::{self, AppState};
use listing_board::{
    ContactMessage, InMemoryListingStore, Listing, ListingService, ListingStore, LogMailer,
    MailError, Mailer, StoreError,
};

pub type Outbox = Arc<Mutex<Vec<ContactMessage>>>;

/// A running server and handles into its collaborators.
pub struct TestServer {
    pub base: String,
    pub client: reqwest::Client,
    pub store: InMemoryListingStore,
    pub outbox: Outbox,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Create a listing through the API and return the response body.
    pub async fn create(&self, body: Value) -> Value {
        let resp = self
            .client
            .post(self.url("/listings"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
        resp.json().await.unwrap()
    }

    pub async fn listings(&self) -> Vec<Value> {
        let resp = self.client.get(self.url("/listings")).send().await.unwrap();
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }
}

/// Bind to port 0 and return the actual base URL.
pub async fn start_router(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn start_with<S: ListingStore + 'static>(
    service: ListingService<S>,
    mailer: impl Mailer + 'static,
    static_dir: Option<&Path>,
) -> String {
    start_router(http::router(AppState::new(service, mailer), static_dir)).await
}

/// Server over an empty in-memory store with a recording mailer.
pub async fn start_server() -> TestServer {
    start_server_on(InMemoryListingStore::new()).await
}

pub async fn start_server_on(store: InMemoryListingStore) -> TestServer {
    serve_store(store.clone(), store).await
}

/// Server whose reads see `store` but whose every write fails.
pub async fn start_server_failing_writes(store: InMemoryListingStore) -> TestServer {
    serve_store(FailingWriteStore(store.clone()), store).await
}

async fn serve_store<S: ListingStore + 'static>(
    backend: S,
    store: InMemoryListingStore,
) -> TestServer {
    let outbox: Outbox = Arc::new(Mutex::new(Vec::new()));
    let base = start_with(
        ListingService::new(backend),
        LogMailer::with_buffer(outbox.clone()),
        None,
    )
    .await;
    TestServer {
        base,
        client: reqwest::Client::new(),
        store,
        outbox,
    }
}

pub fn lamp() -> Value {
    json!({
        "title": "Lamp",
        "price": 20,
        "description": "IKEA",
        "contact": "a@b.com"
    })
}

/// Delegates reads to an in-memory store and fails every write.
pub struct FailingWriteStore(pub InMemoryListingStore);

impl ListingStore for FailingWriteStore {
    fn ensure_exists(&self) -> Result<(), StoreError> {
        self.0.ensure_exists()
    }

    fn read(&self) -> Result<Vec<Listing>, StoreError> {
        self.0.read()
    }

    fn write(&self, _listings: &[Listing]) -> Result<(), StoreError> {
        Err(StoreError::Io("disk full".into()))
    }
}

/// A mailer whose relay is always down.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _message: &ContactMessage) -> Result<(), MailError> {
        Err(MailError::Transport("connection refused".into()))
    }
}
