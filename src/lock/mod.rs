//! Single-writer guard for read-modify-write cycles on the listings document.
//!
//! Every mutating service operation holds the lock from the moment it reads
//! the collection until the rewritten collection is persisted, so two
//! overlapping likes can no longer overwrite each other.

mod error;
mod in_memory;

pub use error::LockError;
pub use in_memory::InMemoryLock;

/// Trait for a single lock instance.
///
/// Implementations provide blocking lock and unlock.
/// The in-process lock uses `Mutex` + `Condvar`; a multi-process deployment
/// would swap in a file or advisory lock.
pub trait Lock: Send + Sync {
    /// Acquire the lock, blocking until it becomes available.
    fn lock(&self) -> Result<(), LockError>;

    /// Release the lock.
    fn unlock(&self) -> Result<(), LockError>;
}

/// Holds a `Lock` until dropped.
pub struct LockGuard<'a, L: Lock + ?Sized> {
    lock: &'a L,
}

impl<'a, L: Lock + ?Sized> LockGuard<'a, L> {
    /// Block until `lock` is acquired.
    pub fn acquire(lock: &'a L) -> Result<Self, LockError> {
        lock.lock()?;
        Ok(Self { lock })
    }
}

impl<L: Lock + ?Sized> Drop for LockGuard<'_, L> {
    fn drop(&mut self) {
        if let Err(e) = self.lock.unlock() {
            tracing::error!(error = %e, "failed to release listings lock");
        }
    }
}
