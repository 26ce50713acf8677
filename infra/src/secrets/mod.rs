//! Secrets Module
//!
//! Startup-time retrieval of the mail transport secret. The configured
//! secret value is either the secret itself or the name of a Google Secret
//! Manager version to fetch; fetched payloads are integrity checked before
//! use.

use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

use otp_shared::config::{MailConfig, MailProvider, SecretSourceKind};

use crate::InfrastructureError;

pub mod checksum;
pub mod env;
pub mod gcp;

pub use checksum::verify_crc32c;
pub use env::StaticSecretSource;
pub use gcp::GcpSecretManager;

#[cfg(test)]
mod tests;

/// A source of secret material
#[async_trait]
pub trait SecretSource: Send + Sync {
    /// Fetch the raw bytes identified by `identifier`
    async fn fetch(&self, identifier: &str) -> Result<Vec<u8>, InfrastructureError>;

    /// Get the source name for logging
    fn source_name(&self) -> &str;
}

/// Resolve the mail transport secret once, before the server starts
///
/// The mock transport needs no secret, so nothing is fetched for it.
pub async fn resolve_mail_secret(config: &MailConfig) -> Result<String, InfrastructureError> {
    if config.provider == MailProvider::Mock {
        return Ok(config.api_secret.clone());
    }

    let source: Box<dyn SecretSource> = match config.secret_source {
        SecretSourceKind::Env => Box::new(StaticSecretSource),
        SecretSourceKind::Gcp => Box::new(GcpSecretManager::new(Duration::from_secs(
            config.timeout_secs,
        ))?),
    };

    let secret = fetch_string(source.as_ref(), &config.api_secret).await?;
    info!("Mail transport secret resolved from {}", source.source_name());
    Ok(secret)
}

/// Fetch a secret and decode it as UTF-8
pub async fn fetch_string(
    source: &dyn SecretSource,
    identifier: &str,
) -> Result<String, InfrastructureError> {
    if identifier.is_empty() {
        return Err(InfrastructureError::Config(
            "MAIL_SERVER_API_SECRET not set".to_string(),
        ));
    }

    let bytes = source.fetch(identifier).await?;
    String::from_utf8(bytes)
        .map_err(|_| InfrastructureError::Secret("Secret payload is not valid UTF-8".to_string()))
}
