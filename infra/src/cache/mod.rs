//! Cache module for code storage
//!
//! This module provides the Redis client, the Redis-backed code store and
//! an in-memory store with the same semantics.

pub mod memory_store;
pub mod redis_client;
pub mod redis_code_store;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use otp_core::services::issuance::CodeStore;
use otp_shared::config::{CacheConfig, CodeStoreBackend};

use crate::InfrastructureError;

pub use memory_store::InMemoryCodeStore;
pub use redis_client::RedisClient;
pub use redis_code_store::RedisCodeStore;

/// Create the code store selected by configuration
///
/// For Redis this connects and pings before returning, so a bad URL or an
/// unreachable server fails startup rather than the first request.
pub async fn create_code_store(
    config: &CacheConfig,
) -> Result<Arc<dyn CodeStore>, InfrastructureError> {
    match config.backend {
        CodeStoreBackend::Redis => {
            let store = RedisCodeStore::connect(config).await?;
            Ok(Arc::new(store))
        }
        CodeStoreBackend::Memory => {
            tracing::warn!("Using in-memory code store; codes are not shared between instances");
            Ok(Arc::new(InMemoryCodeStore::new()))
        }
    }
}
