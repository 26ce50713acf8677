//! Code store configuration module

use serde::{Deserialize, Serialize};

/// Default lifetime of an issued code in seconds (5 minutes)
pub const DEFAULT_CODE_TTL_SECONDS: u64 = 300;

/// Which store keeps issued codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeStoreBackend {
    /// Shared Redis instance
    #[default]
    Redis,
    /// Process-local map, for development only
    Memory,
}

impl std::str::FromStr for CodeStoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redis" => Ok(CodeStoreBackend::Redis),
            "memory" | "in-memory" => Ok(CodeStoreBackend::Memory),
            _ => Err(format!("Invalid code store backend: {}", s)),
        }
    }
}

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Store backend
    #[serde(default)]
    pub backend: CodeStoreBackend,

    /// Lifetime of an issued code in seconds
    #[serde(default = "default_code_ttl")]
    pub code_ttl: u64,

    /// Optional cache key prefix
    #[serde(default)]
    pub key_prefix: Option<String>,

    /// Connection attempts made at startup before giving up
    #[serde(default = "default_connect_retries")]
    pub connect_retries: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            backend: CodeStoreBackend::default(),
            code_ttl: default_code_ttl(),
            key_prefix: None,
            connect_retries: default_connect_retries(),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    ///
    /// `REDIS_URL` wins; otherwise the URL is assembled from `DB_URL` and `DB_PORT`.
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| {
            redis_url_from_parts(
                std::env::var("DB_URL").ok().as_deref(),
                std::env::var("DB_PORT").ok().as_deref(),
            )
        });

        Self {
            url,
            backend: std::env::var("CODE_STORE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            code_ttl: std::env::var("OTP_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ttl| *ttl > 0)
                .unwrap_or(DEFAULT_CODE_TTL_SECONDS),
            key_prefix: std::env::var("REDIS_KEY_PREFIX").ok().filter(|p| !p.is_empty()),
            connect_retries: std::env::var("REDIS_CONNECT_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_connect_retries),
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

/// Build a Redis URL from a host (or host URL) and a port
pub fn redis_url_from_parts(host: Option<&str>, port: Option<&str>) -> String {
    let host = host.filter(|h| !h.is_empty()).unwrap_or("localhost");
    let port = port.filter(|p| !p.is_empty()).unwrap_or("6379");
    let host = host
        .trim_start_matches("redis://")
        .trim_end_matches('/');
    format!("redis://{}:{}", host, port)
}

fn default_code_ttl() -> u64 {
    DEFAULT_CODE_TTL_SECONDS
}

fn default_connect_retries() -> u32 {
    3
}
