//! Configuration module
//!
//! - `cache` - Code store backend and Redis configuration
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Email transport and credential source
//! - `server` - HTTP server configuration

pub mod cache;
pub mod environment;
pub mod mail;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cache::{CacheConfig, CodeStoreBackend};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::{MailConfig, MailProvider, SecretSourceKind};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
///
/// Built once at startup and handed to the service and its collaborators.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Code store configuration
    pub cache: CacheConfig,

    /// Mail transport configuration
    pub mail: MailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            cache: CacheConfig::from_env(),
            mail: MailConfig::from_env(environment),
            logging: LoggingConfig::from_env(environment),
        }
    }
}
