use std::error::Error;
use std::fmt;

use crate::lock::LockError;
use crate::store::StoreError;

/// Error type for listing operations.
#[derive(Debug)]
pub enum ServiceError {
    /// Required input missing or not coercible.
    Validation(String),
    /// No listing carries the requested id.
    NotFound(String),
    /// The listing was already marked sold.
    AlreadySold(String),
    /// The collection could not be loaded.
    StoreRead(StoreError),
    /// The collection could not be persisted.
    StoreWrite(StoreError),
    /// The single-writer guard failed.
    Lock(LockError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Validation(msg) => write!(f, "validation failed: {}", msg),
            ServiceError::NotFound(id) => write!(f, "listing not found: {}", id),
            ServiceError::AlreadySold(id) => write!(f, "listing already sold: {}", id),
            ServiceError::StoreRead(e) => write!(f, "store read failed: {}", e),
            ServiceError::StoreWrite(e) => write!(f, "store write failed: {}", e),
            ServiceError::Lock(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ServiceError::StoreRead(e) | ServiceError::StoreWrite(e) => Some(e),
            ServiceError::Lock(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LockError> for ServiceError {
    fn from(err: LockError) -> Self {
        ServiceError::Lock(err)
    }
}

impl ServiceError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 400,
            ServiceError::NotFound(_) => 404,
            ServiceError::AlreadySold(_) => 400,
            ServiceError::StoreRead(_) => 500,
            ServiceError::StoreWrite(_) => 500,
            ServiceError::Lock(_) => 500,
        }
    }

    /// The message shown to clients. Store and lock details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            ServiceError::Validation(msg) => msg.clone(),
            ServiceError::NotFound(_) => "Listing not found".to_string(),
            ServiceError::AlreadySold(_) => "Already sold".to_string(),
            ServiceError::StoreRead(_) => "Failed to read listings".to_string(),
            ServiceError::StoreWrite(_) | ServiceError::Lock(_) => {
                "Failed to save listings".to_string()
            }
        }
    }
}
