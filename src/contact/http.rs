use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use super::{ContactMessage, MailError, Mailer};

/// Where and as whom the relay sends contact messages.
#[derive(Debug, Clone)]
pub struct MailSettings {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
    pub to: String,
}

/// Mailer backed by a transactional-email HTTP API.
///
/// Sends `POST {api_url}` with a bearer token and a JSON body of
/// `from`, `to`, `reply_to`, `subject` and `text`. Any non-2xx answer is a
/// delivery failure; there are no retries.
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    settings: MailSettings,
}

impl HttpMailer {
    pub fn new(settings: MailSettings) -> Self {
        Self::with_client(reqwest::Client::new(), settings)
    }

    pub fn with_client(client: reqwest::Client, settings: MailSettings) -> Self {
        Self { client, settings }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        let body = json!({
            "from": self.settings.from,
            "to": [self.settings.to],
            "reply_to": message.email,
            "subject": message.subject(),
            "text": message.text(),
        });

        let resp = self
            .client
            .post(&self.settings.api_url)
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(reply_to = %message.email, "contact message relayed");
        Ok(())
    }
}
