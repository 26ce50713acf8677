//! Redis-backed code store
//!
//! One flat keyspace: the recipient email (optionally prefixed) maps to the
//! active code, written with `SET ... EX` so Redis handles expiry and a new
//! write replaces the old value.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use otp_core::domain::entities::OtpCode;
use otp_core::services::issuance::CodeStore;
use otp_shared::config::CacheConfig;
use otp_shared::email::mask_email;

use crate::cache::RedisClient;
use crate::InfrastructureError;

/// Code store over a shared Redis connection
#[derive(Clone)]
pub struct RedisCodeStore {
    /// Redis client for cache operations
    redis_client: RedisClient,
    /// Key layout and prefix
    config: CacheConfig,
}

impl RedisCodeStore {
    pub fn new(redis_client: RedisClient, config: &CacheConfig) -> Self {
        Self {
            redis_client,
            config: config.clone(),
        }
    }

    /// Connect to Redis and build the store
    pub async fn connect(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        let redis_client = RedisClient::new(config).await?;
        Ok(Self::new(redis_client, config))
    }

    /// Key under which a recipient's code lives
    pub(crate) fn format_key(&self, recipient: &str) -> String {
        self.config.make_key(recipient)
    }

    /// Read the active code for a recipient, if it has not expired
    pub async fn get(&self, recipient: &str) -> Result<Option<OtpCode>, InfrastructureError> {
        let value = self.redis_client.get(&self.format_key(recipient)).await?;
        Ok(value.as_deref().and_then(OtpCode::parse))
    }

    /// Remaining lifetime of a recipient's code in seconds
    pub async fn remaining_ttl(&self, recipient: &str) -> Result<Option<i64>, InfrastructureError> {
        self.redis_client.ttl(&self.format_key(recipient)).await
    }

    pub async fn store(
        &self,
        recipient: &str,
        code: &OtpCode,
        ttl: Duration,
    ) -> Result<(), InfrastructureError> {
        let ttl_secs = expiry_seconds(ttl);
        self.redis_client
            .set_with_expiry(&self.format_key(recipient), code.as_str(), ttl_secs)
            .await?;

        debug!(
            recipient = %mask_email(recipient),
            ttl_secs,
            "Stored code in Redis"
        );
        Ok(())
    }
}

/// Whole seconds for `EX`, rounded up
///
/// Redis rejects `EX 0`, so the result is at least 1.
pub(crate) fn expiry_seconds(ttl: Duration) -> u64 {
    let secs = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
    secs.max(1)
}

#[async_trait]
impl CodeStore for RedisCodeStore {
    async fn put(&self, recipient: &str, code: &OtpCode, ttl: Duration) -> Result<(), String> {
        self.store(recipient, code, ttl).await.map_err(|e| e.to_string())
    }
}
