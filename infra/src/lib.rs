//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the issuance pipeline
//! depends on.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Cache**: Redis client and the Redis-backed code store, plus an
//!   in-memory store for development
//! - **Mail**: Mailjet transport and a logging mock
//! - **Secrets**: startup-time credential retrieval with integrity checking

/// Cache module - Redis client and code stores
pub mod cache;

/// Mail module - Email transports
pub mod mail;

/// Secrets module - Credential sources
pub mod secrets;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail transport error
    #[error("Mail service error: {0}")]
    Mail(String),

    /// Secret retrieval error
    #[error("Secret retrieval error: {0}")]
    Secret(String),

    /// Fetched payload does not match its checksum
    #[error("Data corruption detected: expected crc32c {expected}, got {actual}")]
    DataCorruption { expected: u32, actual: u32 },
}
