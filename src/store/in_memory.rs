//! InMemoryListingStore - document held in memory for testing and development.

use std::sync::{Arc, RwLock};

use super::{decode, encode, ListingStore, StoreError};
use crate::listing::Listing;

/// In-memory listings store.
///
/// Keeps the serialized document bytes rather than the parsed collection, so
/// a missing or corrupt document behaves exactly as it would on disk.
/// Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryListingStore {
    document: Arc<RwLock<Option<Vec<u8>>>>,
}

impl Default for InMemoryListingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryListingStore {
    /// Create a store holding an empty collection.
    pub fn new() -> Self {
        Self::with_document(b"[]".to_vec())
    }

    /// Create a store with no document at all.
    pub fn missing() -> Self {
        Self {
            document: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a store whose document is the given raw bytes.
    pub fn with_document(bytes: Vec<u8>) -> Self {
        Self {
            document: Arc::new(RwLock::new(Some(bytes))),
        }
    }

    /// Raw document bytes, if any.
    pub fn document(&self) -> Result<Option<Vec<u8>>, StoreError> {
        let document = self.document.read().map_err(|_| StoreError::Poisoned)?;
        Ok(document.clone())
    }
}

impl ListingStore for InMemoryListingStore {
    fn ensure_exists(&self) -> Result<(), StoreError> {
        let mut document = self.document.write().map_err(|_| StoreError::Poisoned)?;
        if document.is_none() {
            *document = Some(encode(&[])?);
        }
        Ok(())
    }

    fn read(&self) -> Result<Vec<Listing>, StoreError> {
        let document = self.document.read().map_err(|_| StoreError::Poisoned)?;
        match document.as_deref() {
            Some(bytes) => decode(bytes),
            None => Err(StoreError::Missing("in-memory document".into())),
        }
    }

    fn write(&self, listings: &[Listing]) -> Result<(), StoreError> {
        let bytes = encode(listings)?;
        let mut document = self.document.write().map_err(|_| StoreError::Poisoned)?;
        *document = Some(bytes);
        Ok(())
    }
}
