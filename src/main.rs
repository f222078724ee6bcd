use clap::Parser;
use tracing::{info, warn};

use listing_board::http::{self, AppState};
use listing_board::{Config, FileListingStore, HttpMailer, ListingService, ListingStore, LogMailer};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    listing_board::telemetry::init();
    let config = Config::parse();

    let store = FileListingStore::new(&config.data_file);
    if let Err(e) = store.ensure_exists() {
        warn!(path = %store.path().display(), error = %e, "could not initialise listings document");
    }
    let listings = ListingService::new(store).with_read_policy(config.read_policy());

    let state = match config.mail_settings() {
        Some(settings) => {
            info!(relay = %settings.api_url, "contact messages relayed by email");
            AppState::new(listings, HttpMailer::new(settings))
        }
        None => {
            warn!("MAIL_API_KEY not set; contact messages will only be logged");
            AppState::new(listings, LogMailer::new())
        }
    };

    let app = http::router(state, config.static_dir.as_deref());
    http::serve(app, &config.bind_addr()).await
}
