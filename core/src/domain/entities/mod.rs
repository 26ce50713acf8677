//! Domain entities flowing through the issuance pipeline.

pub mod email_message;
pub mod issuance_request;
pub mod otp_code;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use email_message::{EmailMessage, Mailbox, OTP_HTML_BODY};
pub use issuance_request::{IssuanceRequest, API_KEY_LENGTH};
pub use otp_code::{OtpCode, CODE_LENGTH};
