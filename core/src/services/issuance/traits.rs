//! Traits for store and transport integration

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::entities::{EmailMessage, OtpCode};

/// Expiring key-value store holding the active code per recipient
///
/// `put` overwrites without reading. Two concurrent issuances for the same
/// recipient race and the last write to reach the store wins, even if the
/// other request's email is delivered later.
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Store `code` under `recipient`, expiring after `ttl`
    async fn put(&self, recipient: &str, code: &OtpCode, ttl: Duration) -> Result<(), String>;
}

/// Email transport
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send one message to its single recipient
    async fn send(&self, message: &EmailMessage) -> Result<(), String>;
}
