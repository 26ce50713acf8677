//! Business services containing domain logic and use cases.

pub mod issuance;

// Re-export commonly used types
pub use issuance::{CodeStore, IssuanceConfig, IssuanceService, Notifier, Validator};
