//! OTP issuance module
//!
//! This module provides the issuance pipeline:
//! - Request validation (API key length, email shape)
//! - Code generation from the OS CSPRNG
//! - Expiring persistence through a [`CodeStore`]
//! - Delivery through a [`Notifier`]

mod config;
mod service;
mod traits;
mod validator;

#[cfg(test)]
mod tests;

pub use config::IssuanceConfig;
pub use service::IssuanceService;
pub use traits::{CodeStore, Notifier};
pub use validator::Validator;
