use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::info;

use super::{ContactMessage, MailError, Mailer};

/// A mailer that logs messages instead of sending them.
///
/// Used when no relay API key is configured, and in tests with a buffer.
#[derive(Clone, Default)]
pub struct LogMailer {
    buffer: Option<Arc<Mutex<Vec<ContactMessage>>>>,
}

impl LogMailer {
    pub fn new() -> Self {
        LogMailer { buffer: None }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<ContactMessage>>>) -> Self {
        LogMailer {
            buffer: Some(buffer),
        }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        info!(
            name = %message.name,
            email = %message.email,
            "contact message (not relayed): {}",
            message.message
        );
        if let Some(buffer) = &self.buffer {
            buffer
                .lock()
                .map_err(|_| MailError::BufferPoisoned)?
                .push(message.clone());
        }
        Ok(())
    }
}
