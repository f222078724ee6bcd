use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "listing_board=info,tower_http=info";

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(true))
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
