use serde_json::Value;
use tracing::{debug, info, warn};

use super::ReadPolicy;
use crate::error::ServiceError;
use crate::listing::{Listing, NewListing};
use crate::lock::{InMemoryLock, LockGuard};
use crate::store::ListingStore;

/// Listing operations over a store, with mutations serialized by a lock.
///
/// Generic over the store `S`: file-backed in production, in-memory in tests.
pub struct ListingService<S> {
    store: S,
    lock: InMemoryLock,
    read_policy: ReadPolicy,
}

impl<S: ListingStore> ListingService<S> {
    /// Create a service with an in-process lock and strict reads.
    pub fn new(store: S) -> Self {
        Self {
            store,
            lock: InMemoryLock::new(),
            read_policy: ReadPolicy::default(),
        }
    }

    /// Builder-style setter for the read-failure policy.
    pub fn with_read_policy(mut self, read_policy: ReadPolicy) -> Self {
        self.read_policy = read_policy;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn read_policy(&self) -> ReadPolicy {
        self.read_policy
    }

    /// All listings in stored order.
    pub fn list(&self) -> Result<Vec<Listing>, ServiceError> {
        self.load()
    }

    /// Validate `body`, append a new listing, and return it.
    pub fn create(&self, body: &Value) -> Result<Listing, ServiceError> {
        let input = NewListing::from_json(body)?;
        let listing = self.mutate(|listings| {
            let listing = Listing::create(input);
            listings.push(listing.clone());
            Ok(listing)
        })?;
        info!(id = %listing.id, title = %listing.title, "listing created");
        Ok(listing)
    }

    /// Add one like to the listing and return its new like count.
    pub fn like(&self, id: &str) -> Result<u64, ServiceError> {
        let likes = self.mutate(|listings| Ok(find_mut(listings, id)?.like()))?;
        debug!(id, likes, "listing liked");
        Ok(likes)
    }

    /// Mark the listing sold. Fails without writing if it already is.
    pub fn buy(&self, id: &str) -> Result<Listing, ServiceError> {
        let listing = self.mutate(|listings| {
            let listing = find_mut(listings, id)?;
            listing.mark_sold()?;
            Ok(listing.clone())
        })?;
        info!(id, "listing sold");
        Ok(listing)
    }

    /// Remove the listing and return its id.
    pub fn delete(&self, id: &str) -> Result<String, ServiceError> {
        let removed = self.mutate(|listings| {
            let index = listings
                .iter()
                .position(|l| l.id == id)
                .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;
            Ok(listings.remove(index).id)
        })?;
        info!(id = %removed, "listing deleted");
        Ok(removed)
    }

    fn load(&self) -> Result<Vec<Listing>, ServiceError> {
        match self.store.read() {
            Ok(listings) => Ok(listings),
            Err(e) => match self.read_policy {
                ReadPolicy::Strict => Err(ServiceError::StoreRead(e)),
                ReadPolicy::Lenient => {
                    warn!(error = %e, "listings unreadable, treating as empty");
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Run one locked read-modify-write cycle. Nothing is written when `op` fails.
    fn mutate<T>(
        &self,
        op: impl FnOnce(&mut Vec<Listing>) -> Result<T, ServiceError>,
    ) -> Result<T, ServiceError> {
        let _guard = LockGuard::acquire(&self.lock)?;
        let mut listings = self.load()?;
        let result = op(&mut listings)?;
        self.store
            .write(&listings)
            .map_err(ServiceError::StoreWrite)?;
        Ok(result)
    }
}

fn find_mut<'a>(listings: &'a mut [Listing], id: &str) -> Result<&'a mut Listing, ServiceError> {
    listings
        .iter_mut()
        .find(|l| l.id == id)
        .ok_or_else(|| ServiceError::NotFound(id.to_string()))
}
