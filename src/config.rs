//! Runtime configuration from command-line flags and environment variables.

use std::path::PathBuf;

use clap::Parser;

use crate::contact::MailSettings;
use crate::service::ReadPolicy;

#[derive(Parser, Debug, Clone)]
#[command(name = "listing-board", version, about = "Peer-to-peer listing board backend")]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// JSON document holding the listings.
    #[arg(long, env = "LISTINGS_FILE", default_value = "data/listings.json")]
    pub data_file: PathBuf,

    /// Directory served for requests no API route matches.
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Treat a missing or unreadable listings document as empty instead of failing.
    #[arg(long, env = "LENIENT_READS")]
    pub lenient_reads: bool,

    /// Transactional-email API endpoint.
    #[arg(long, env = "MAIL_API_URL", default_value = "https://api.resend.com/emails")]
    pub mail_api_url: String,

    /// Bearer token for the email API. Without it contact messages are only logged.
    #[arg(long, env = "MAIL_API_KEY", hide_env_values = true)]
    pub mail_api_key: Option<String>,

    #[arg(long, env = "MAIL_FROM", default_value = "noreply@listing-board.local")]
    pub mail_from: String,

    #[arg(long, env = "MAIL_TO", default_value = "owner@listing-board.local")]
    pub mail_to: String,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn read_policy(&self) -> ReadPolicy {
        if self.lenient_reads {
            ReadPolicy::Lenient
        } else {
            ReadPolicy::Strict
        }
    }

    /// Relay settings, if an API key was given.
    pub fn mail_settings(&self) -> Option<MailSettings> {
        self.mail_api_key.as_ref().map(|api_key| MailSettings {
            api_url: self.mail_api_url.clone(),
            api_key: api_key.clone(),
            from: self.mail_from.clone(),
            to: self.mail_to.clone(),
        })
    }
}
