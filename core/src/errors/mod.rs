//! Issuance error taxonomy.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Every way an issuance request can end without a code being delivered
///
/// The first three are client errors raised before any collaborator is
/// touched. The last two wrap whatever the collaborator reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IssuanceError {
    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Failed to store OTP: {message}")]
    StoreUnavailable { message: String },

    #[error("Failed to send OTP: {message}")]
    SendFailed { message: String },
}

impl IssuanceError {
    /// Whether the caller sent a bad request
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            IssuanceError::MalformedRequest { .. }
                | IssuanceError::InvalidApiKey
                | IssuanceError::InvalidEmailFormat
        )
    }

    /// Stable code for logs
    pub fn error_code(&self) -> &'static str {
        match self {
            IssuanceError::MalformedRequest { .. } => "MALFORMED_REQUEST",
            IssuanceError::InvalidApiKey => "INVALID_API_KEY",
            IssuanceError::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
            IssuanceError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            IssuanceError::SendFailed { .. } => "SEND_FAILED",
        }
    }
}

pub type IssuanceResult<T> = Result<T, IssuanceError>;
