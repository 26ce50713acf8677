//! Secret supplied directly through configuration

use async_trait::async_trait;

use super::SecretSource;
use crate::InfrastructureError;

/// Treats the identifier as the secret value itself
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSecretSource;

#[async_trait]
impl SecretSource for StaticSecretSource {
    async fn fetch(&self, identifier: &str) -> Result<Vec<u8>, InfrastructureError> {
        Ok(identifier.as_bytes().to_vec())
    }

    fn source_name(&self) -> &str {
        "environment"
    }
}
