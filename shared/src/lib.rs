//! Shared utilities and common types for the OTP service
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Email helpers used for validation and log masking

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, CodeStoreBackend, Environment, LogFormat, LoggingConfig, MailConfig,
    MailProvider, SecretSourceKind, ServerConfig,
};
pub use utils::email;
