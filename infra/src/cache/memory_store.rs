//! In-memory code store
//!
//! Process-local stand-in for Redis with the same overwrite and expiry
//! behavior. Codes do not survive a restart and are not shared between
//! instances, so this is only suitable for development and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use otp_core::domain::entities::OtpCode;
use otp_core::services::issuance::CodeStore;

/// A stored code and the instant it stops being valid
#[derive(Debug, Clone)]
struct Entry {
    code: OtpCode,
    expires_at: Instant,
}

/// Expiring map from recipient to code
#[derive(Default)]
pub struct InMemoryCodeStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the active code for a recipient
    ///
    /// Expired entries read as absent.
    pub async fn get(&self, recipient: &str) -> Option<OtpCode> {
        let entries = self.entries.read().await;
        entries
            .get(recipient)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.code.clone())
    }

    /// Number of unexpired entries
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| entry.expires_at > now)
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop expired entries
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }
}

#[async_trait]
impl CodeStore for InMemoryCodeStore {
    async fn put(&self, recipient: &str, code: &OtpCode, ttl: Duration) -> Result<(), String> {
        let mut entries = self.entries.write().await;
        // Expired entries are dropped on every write
        let now = Instant::now();
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            recipient.to_string(),
            Entry {
                code: code.clone(),
                expires_at: now + ttl,
            },
        );
        Ok(())
    }
}
