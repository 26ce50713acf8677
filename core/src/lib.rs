//! # OTP Core
//!
//! Core business logic and domain layer for the OTP service.
//! This crate contains the domain types, the issuance pipeline, the
//! collaborator traits it depends on, and the error taxonomy.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
