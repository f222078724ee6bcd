//! Listing store - persistence of the whole collection as one JSON document.
//!
//! There is no partial update: every mutation reads the full ordered
//! collection, changes it in memory, and writes it back.
//!
//! ## Example
//!
//! ```ignore
//! use listing_board::store::{FileListingStore, ListingStore};
//!
//! let store = FileListingStore::new("data/listings.json");
//! store.ensure_exists()?;
//! let mut listings = store.read()?;
//! listings.retain(|l| !l.sold);
//! store.write(&listings)?;
//! ```

mod file;
mod in_memory;

use std::fmt;

use crate::listing::Listing;

/// Durable storage for the ordered listings collection.
pub trait ListingStore: Send + Sync {
    /// Make sure the backing document exists, writing an empty array if absent.
    fn ensure_exists(&self) -> Result<(), StoreError>;

    /// Load the full collection in stored order.
    fn read(&self) -> Result<Vec<Listing>, StoreError>;

    /// Replace the full collection.
    fn write(&self, listings: &[Listing]) -> Result<(), StoreError>;
}

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing document does not exist.
    Missing(String),
    /// The document exists but is not a valid listings array.
    Corrupt(String),
    /// Filesystem failure.
    Io(String),
    /// The collection could not be serialized.
    Serialize(String),
    /// An in-process lock was poisoned.
    Poisoned,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Missing(location) => write!(f, "listings document missing: {}", location),
            StoreError::Corrupt(msg) => write!(f, "listings document corrupt: {}", msg),
            StoreError::Io(msg) => write!(f, "listings io error: {}", msg),
            StoreError::Serialize(msg) => write!(f, "listings serialization error: {}", msg),
            StoreError::Poisoned => write!(f, "listings store lock poisoned"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Serialize the collection the way it is kept on disk: an indented JSON array.
pub(crate) fn encode(listings: &[Listing]) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec_pretty(listings).map_err(|e| StoreError::Serialize(e.to_string()))
}

pub(crate) fn decode(bytes: &[u8]) -> Result<Vec<Listing>, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Corrupt(e.to_string()))
}

pub use file::FileListingStore;
pub use in_memory::InMemoryListingStore;
