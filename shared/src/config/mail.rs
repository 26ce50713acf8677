//! Mail transport configuration module

use serde::{Deserialize, Serialize};

use super::environment::Environment;

/// Default Mailjet v3.1 send endpoint
pub const DEFAULT_MAILJET_URL: &str = "https://api.mailjet.com/v3.1/send";

/// Default sender display name
pub const DEFAULT_FROM_NAME: &str = "Misfits Pilot";

/// Email transport provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Mailjet send API
    Mailjet,
    /// Logs messages instead of sending them
    Mock,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mailjet" => Ok(MailProvider::Mailjet),
            "mock" => Ok(MailProvider::Mock),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// Where the transport secret comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretSourceKind {
    /// `api_secret` holds the secret itself
    #[default]
    Env,
    /// `api_secret` holds a Google Secret Manager version name
    Gcp,
}

impl std::str::FromStr for SecretSourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "env" => Ok(SecretSourceKind::Env),
            "gcp" | "secret-manager" => Ok(SecretSourceKind::Gcp),
            _ => Err(format!("Invalid secret source: {}", s)),
        }
    }
}

/// Mail transport configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Transport provider
    pub provider: MailProvider,

    /// Public API key
    pub api_key: String,

    /// API secret, or the identifier of the secret when `secret_source` is not `Env`
    pub api_secret: String,

    /// How `api_secret` is resolved at startup
    #[serde(default)]
    pub secret_source: SecretSourceKind,

    /// Send endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sender address
    pub from_email: String,

    /// Sender display name
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key)
            .field("api_secret", &"****")
            .field("secret_source", &self.secret_source)
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("from_email", &self.from_email)
            .field("from_name", &self.from_name)
            .finish()
    }
}

impl MailConfig {
    /// Create from environment variables
    ///
    /// The provider defaults to Mailjet in production and to the mock elsewhere.
    pub fn from_env(env: Environment) -> Self {
        let default_provider = if env.is_production() {
            MailProvider::Mailjet
        } else {
            MailProvider::Mock
        };

        Self {
            provider: std::env::var("MAIL_PROVIDER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default_provider),
            api_key: std::env::var("MAIL_SERVER_API_KEY").unwrap_or_default(),
            api_secret: std::env::var("MAIL_SERVER_API_SECRET").unwrap_or_default(),
            secret_source: std::env::var("MAIL_SECRET_SOURCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            api_url: std::env::var("MAIL_API_URL").unwrap_or_else(|_| default_api_url()),
            timeout_secs: std::env::var("MAIL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout_secs),
            from_email: std::env::var("FROM_EMAIL").unwrap_or_default(),
            from_name: std::env::var("FROM_NAME").unwrap_or_else(|_| default_from_name()),
        }
    }

    /// Mock transport configuration for development and tests
    pub fn mock(from_email: impl Into<String>) -> Self {
        Self {
            provider: MailProvider::Mock,
            api_key: String::new(),
            api_secret: String::new(),
            secret_source: SecretSourceKind::Env,
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            from_email: from_email.into(),
            from_name: default_from_name(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_MAILJET_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_from_name() -> String {
    DEFAULT_FROM_NAME.to_string()
}
