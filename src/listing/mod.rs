//! Listings - one marketplace item per record.
//!
//! A `Listing` is created from a validated `NewListing`, mutated in place by
//! `like` and `mark_sold`, and removed by the service's delete operation.
//!
//! ## Example
//!
//! ```ignore
//! use listing_board::listing::{Listing, NewListing};
//! use serde_json::json;
//!
//! let input = NewListing::from_json(&json!({
//!     "title": "Lamp", "price": 20, "description": "IKEA", "contact": "a@b.com"
//! }))?;
//! let mut listing = Listing::create(input);
//! assert_eq!(listing.like(), 1);
//! listing.mark_sold()?;
//! ```

mod id;
mod input;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::ServiceError;

pub use id::{next_id, timestamp_now};
pub use input::{is_truthy, NewListing};

/// A single marketplace item as stored in the listings document.
///
/// Serialized with camelCase field names; `imageUrl`, `likes` and `sold`
/// default when absent from an on-disk record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: Number,
    pub description: String,
    pub contact: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub sold: bool,
    pub created_at: String,
}

impl Listing {
    /// Build a fresh listing: new id, zero likes, unsold, stamped now.
    pub fn create(input: NewListing) -> Self {
        Self {
            id: next_id(),
            title: input.title,
            price: input.price,
            description: input.description,
            contact: input.contact,
            image_url: input.image_url,
            likes: 0,
            sold: false,
            created_at: timestamp_now(),
        }
    }

    /// Add one like and return the new count.
    pub fn like(&mut self) -> u64 {
        self.likes += 1;
        self.likes
    }

    /// Flip `sold` to true. Sold is terminal.
    pub fn mark_sold(&mut self) -> Result<(), ServiceError> {
        if self.sold {
            return Err(ServiceError::AlreadySold(self.id.clone()));
        }
        self.sold = true;
        Ok(())
    }
}
