use std::sync::{Condvar, Mutex, MutexGuard};

use super::{Lock, LockError};

/// In-process lock backed by `Mutex<bool>` + `Condvar`.
///
/// Not reentrant: a thread that locks twice without unlocking blocks forever.
pub struct InMemoryLock {
    held: Mutex<bool>,
    released: Condvar,
}

impl InMemoryLock {
    pub fn new() -> Self {
        InMemoryLock {
            held: Mutex::new(false),
            released: Condvar::new(),
        }
    }

    fn held(&self) -> Result<MutexGuard<'_, bool>, LockError> {
        self.held.lock().map_err(poisoned)
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> LockError {
    LockError::Poisoned(e.to_string())
}

impl Default for InMemoryLock {
    fn default() -> Self {
        Self::new()
    }
}

impl Lock for InMemoryLock {
    fn lock(&self) -> Result<(), LockError> {
        let held = self.held()?;
        let mut held = self
            .released
            .wait_while(held, |held| *held)
            .map_err(poisoned)?;
        *held = true;
        Ok(())
    }

    fn unlock(&self) -> Result<(), LockError> {
        let mut held = self.held()?;
        if std::mem::replace(&mut *held, false) {
            self.released.notify_one();
        }
        Ok(())
    }
}
