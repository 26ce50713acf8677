//! Google Secret Manager Source
//!
//! Accesses a secret version over the Secret Manager REST API. The access
//! token comes from `GOOGLE_OAUTH_ACCESS_TOKEN` when set, otherwise from the
//! compute metadata server. Every payload carries a CRC32C checksum which
//! is verified before the data is returned.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

use super::{verify_crc32c, SecretSource};
use crate::InfrastructureError;

/// Default Secret Manager REST endpoint
pub const DEFAULT_SECRET_MANAGER_URL: &str = "https://secretmanager.googleapis.com/v1";

/// Metadata server endpoint for the default service account token
pub const METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

/// Response of `GET /v1/{name}:access`
#[derive(Debug, Deserialize)]
pub(crate) struct AccessSecretVersionResponse {
    #[serde(default)]
    pub name: String,
    pub payload: SecretPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SecretPayload {
    /// Base64 encoded secret bytes
    pub data: String,
    /// int64 checksum, encoded as a JSON string
    #[serde(default)]
    pub data_crc32c: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MetadataToken {
    access_token: String,
}

/// Decode an access response and verify its checksum
pub(crate) fn decode_payload(
    response: &AccessSecretVersionResponse,
) -> Result<Vec<u8>, InfrastructureError> {
    let data = STANDARD.decode(&response.payload.data).map_err(|e| {
        InfrastructureError::Secret(format!("Invalid base64 in secret payload: {}", e))
    })?;

    let expected = response
        .payload
        .data_crc32c
        .as_deref()
        .ok_or_else(|| InfrastructureError::Secret("Secret payload has no checksum".to_string()))?
        .parse::<i64>()
        .ok()
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| InfrastructureError::Secret("Invalid secret payload checksum".to_string()))?;

    verify_crc32c(&data, expected)?;
    Ok(data)
}

/// Secret Manager client
pub struct GcpSecretManager {
    client: Client,
    base_url: String,
}

impl GcpSecretManager {
    pub fn new(timeout: Duration) -> Result<Self, InfrastructureError> {
        Self::with_base_url(DEFAULT_SECRET_MANAGER_URL, timeout)
    }

    /// Create a client against a custom endpoint
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, InfrastructureError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// URL of the access call for a secret version name
    pub(crate) fn access_url(&self, name: &str) -> String {
        format!("{}/{}:access", self.base_url, name.trim_start_matches('/'))
    }

    async fn access_token(&self) -> Result<String, InfrastructureError> {
        if let Ok(token) = std::env::var("GOOGLE_OAUTH_ACCESS_TOKEN") {
            if !token.is_empty() {
                return Ok(token);
            }
        }

        debug!("Requesting access token from metadata server");
        let response = self
            .client
            .get(METADATA_TOKEN_URL)
            .header("Metadata-Flavor", "Google")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(InfrastructureError::Secret(format!(
                "Metadata server returned {}",
                response.status()
            )));
        }

        let token: MetadataToken = response.json().await?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl SecretSource for GcpSecretManager {
    async fn fetch(&self, identifier: &str) -> Result<Vec<u8>, InfrastructureError> {
        let token = self.access_token().await?;

        let response = self
            .client
            .get(self.access_url(identifier))
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Secret Manager error ({}): {}", status, body);
            return Err(InfrastructureError::Secret(format!(
                "Failed to access secret version: {}",
                status
            )));
        }

        let decoded: AccessSecretVersionResponse = response.json().await?;
        debug!("Accessed secret version {}", decoded.name);
        decode_payload(&decoded)
    }

    fn source_name(&self) -> &str {
        "Google Secret Manager"
    }
}
