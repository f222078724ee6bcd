//! HTTP façade - maps requests to listing operations and the contact relay.
//!
//! Uses axum for routing and tower-http for CORS, request tracing and static
//! files.
//!
//! ## Routes
//!
//! - `GET /health` — `{ "success": true, "listings": <count> }`.
//! - `GET /listings` — every listing, in stored order.
//! - `POST /listings` — create a listing (201 with the new record).
//! - `POST /listings/:id/like` — `{ "success": true, "likes": n }`.
//! - `POST /listings/:id/buy` — `{ "success": true, "sold": true }`.
//! - `DELETE /listings/:id` — `{ "success": true, "removedId": id }`.
//! - `POST /contact` — relay a contact-form message.
//!
//! Every failure answers `{ "success": false, "message": ... }`.
//!
//! ## Example
//!
//! ```ignore
//! use listing_board::http::{self, AppState};
//! use listing_board::contact::LogMailer;
//! use listing_board::service::ListingService;
//! use listing_board::store::FileListingStore;
//!
//! let state = AppState::new(
//!     ListingService::new(FileListingStore::new("data/listings.json")),
//!     LogMailer::new(),
//! );
//! let app = http::router(state, None);
//! http::serve(app, "0.0.0.0:3000").await?;
//! ```

mod contact;
mod listings;
mod response;

use std::path::Path;
use std::sync::Arc;

use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::contact::Mailer;
use crate::service::ListingService;
use crate::store::ListingStore;

pub use response::ApiError;

/// Shared state handed to every handler.
pub struct AppState<S> {
    pub listings: Arc<ListingService<S>>,
    pub mailer: Arc<dyn Mailer>,
}

impl<S: ListingStore + 'static> AppState<S> {
    pub fn new(listings: ListingService<S>, mailer: impl Mailer + 'static) -> Self {
        Self {
            listings: Arc::new(listings),
            mailer: Arc::new(mailer),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            listings: self.listings.clone(),
            mailer: self.mailer.clone(),
        }
    }
}

/// Build the application router.
///
/// With `static_dir`, requests no route matches are served from that
/// directory; otherwise they get a JSON 404. A known path with the wrong
/// method gets a JSON 405.
pub fn router<S: ListingStore + 'static>(state: AppState<S>, static_dir: Option<&Path>) -> Router {
    let routes = Router::new()
        .route("/health", get(listings::health::<S>))
        .route(
            "/listings",
            get(listings::list::<S>).post(listings::create::<S>),
        )
        .route("/listings/:id/like", post(listings::like::<S>))
        .route("/listings/:id/buy", post(listings::buy::<S>))
        .route("/listings/:id", delete(listings::remove::<S>))
        .route("/contact", post(contact::send::<S>))
        .with_state(state);

    let routes = match static_dir {
        Some(dir) => routes.fallback_service(ServeDir::new(dir)),
        None => routes.fallback(response::not_found),
    };

    routes
        .layer(middleware::map_response(response::method_not_allowed))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serve `app` at `addr` (e.g. `"0.0.0.0:3000"`) until Ctrl-C.
pub async fn serve(app: Router, addr: &str) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
