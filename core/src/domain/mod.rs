//! Domain layer containing the issuance entities.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
