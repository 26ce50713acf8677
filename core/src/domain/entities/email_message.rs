//! Outbound email assembled for one recipient.

use serde::{Deserialize, Serialize};

use super::otp_code::OtpCode;

/// Static HTML greeting sent alongside the text part
///
/// It does not carry the code; only the text part does.
pub const OTP_HTML_BODY: &str = "<h3>Dear passenger 1, welcome to <a href=\"https://certeef.misfits.fr/\">Certeef</a>!</h3><br />May the delivery force be with you!";

/// An address with an optional display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mailbox {
    pub email: String,
    pub name: Option<String>,
}

impl Mailbox {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }

    pub fn bare(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }
}

/// A single-recipient email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub from: Mailbox,
    pub to: Mailbox,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl EmailMessage {
    /// Build the passcode notification
    pub fn otp_notification(from: Mailbox, to: Mailbox, subject: &str, code: &OtpCode) -> Self {
        Self {
            from,
            to,
            subject: subject.to_string(),
            text_body: format!("Your OTP is {}", code),
            html_body: OTP_HTML_BODY.to_string(),
        }
    }
}
