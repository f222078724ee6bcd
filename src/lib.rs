pub mod config;
pub mod contact;
mod error;
pub mod http;
pub mod listing;
pub mod lock;
pub mod service;
pub mod store;
pub mod telemetry;

pub use config::Config;
pub use contact::{ContactMessage, HttpMailer, LogMailer, MailError, Mailer};
pub use error::ServiceError;
pub use listing::{Listing, NewListing};
pub use service::{ListingService, ReadPolicy};
pub use store::{FileListingStore, InMemoryListingStore, ListingStore, StoreError};
