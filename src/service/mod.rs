//! Listings service - the five listing operations over a `ListingStore`.
//!
//! Each call loads the whole collection fresh from the store, works on it in
//! memory, and (when it mutates) writes the whole collection back. Nothing is
//! cached between calls.
//!
//! ## Quick Start
//!
//! ```ignore
//! use listing_board::service::{ListingService, ReadPolicy};
//! use listing_board::store::InMemoryListingStore;
//! use serde_json::json;
//!
//! let service = ListingService::new(InMemoryListingStore::new())
//!     .with_read_policy(ReadPolicy::Strict);
//!
//! let lamp = service.create(&json!({
//!     "title": "Lamp", "price": 20, "description": "IKEA", "contact": "a@b.com"
//! }))?;
//! service.like(&lamp.id)?;
//! service.buy(&lamp.id)?;
//! service.delete(&lamp.id)?;
//! ```

mod listing_service;

pub use listing_service::ListingService;

/// What a read does when the document is missing or unreadable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadPolicy {
    /// Surface the failure as `ServiceError::StoreRead`.
    #[default]
    Strict,
    /// Log the failure and carry on with an empty collection.
    ///
    /// A later mutation overwrites the unreadable document.
    Lenient,
}
