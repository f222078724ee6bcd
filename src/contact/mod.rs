//! Contact relay - forwards contact-form submissions as email.
//!
//! The form is validated into a `ContactMessage` and handed to a `Mailer`.
//! `HttpMailer` talks to a transactional-email API; `LogMailer` only logs
//! (and optionally records) what it would have sent.

mod http;
mod log;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ServiceError;

pub use self::http::{HttpMailer, MailSettings};
pub use self::log::LogMailer;

/// A validated contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Validate a raw JSON body: `name`, `email` and `message` must be non-empty strings.
    pub fn from_json(body: &Value) -> Result<Self, ServiceError> {
        let field = |name: &str| match body.get(name) {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
            _ => Err(ServiceError::Validation(
                "Name, email and message are required".into(),
            )),
        };
        Ok(Self {
            name: field("name")?,
            email: field("email")?,
            message: field("message")?,
        })
    }

    pub fn subject(&self) -> String {
        format!("New contact message from {}", self.name)
    }

    pub fn text(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        )
    }
}

/// Delivers contact messages somewhere a human will read them.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError>;
}

/// Error type for mail delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    /// The relay answered with a non-success status.
    Rejected { status: u16, body: String },
    /// The relay could not be reached.
    Transport(String),
    /// A recording buffer was poisoned.
    BufferPoisoned,
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailError::Rejected { status, body } => {
                write!(f, "mail relay rejected message ({}): {}", status, body)
            }
            MailError::Transport(msg) => write!(f, "mail relay unreachable: {}", msg),
            MailError::BufferPoisoned => write!(f, "mail buffer poisoned"),
        }
    }
}

impl std::error::Error for MailError {}

impl From<reqwest::Error> for MailError {
    fn from(err: reqwest::Error) -> Self {
        MailError::Transport(err.to_string())
    }
}
