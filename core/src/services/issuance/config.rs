//! Configuration for the issuance service

use std::time::Duration;

use otp_shared::config::mail::DEFAULT_FROM_NAME;

use crate::domain::entities::Mailbox;

/// Default lifetime of an issued code (5 minutes)
pub const DEFAULT_CODE_TTL: Duration = Duration::from_secs(300);

/// Default notification subject
pub const DEFAULT_SUBJECT: &str = "Your OTP";

/// Default recipient display name
pub const DEFAULT_RECIPIENT_NAME: &str = "passenger 1";

/// Configuration for the issuance service
#[derive(Debug, Clone)]
pub struct IssuanceConfig {
    /// How long a stored code stays valid
    pub code_ttl: Duration,
    /// Sender address
    pub from_email: String,
    /// Sender display name
    pub from_name: String,
    /// Notification subject
    pub subject: String,
    /// Display name given to every recipient
    pub recipient_name: String,
}

impl Default for IssuanceConfig {
    fn default() -> Self {
        Self {
            code_ttl: DEFAULT_CODE_TTL,
            from_email: String::new(),
            from_name: DEFAULT_FROM_NAME.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            recipient_name: DEFAULT_RECIPIENT_NAME.to_string(),
        }
    }
}

impl IssuanceConfig {
    pub fn new(from_email: impl Into<String>) -> Self {
        Self {
            from_email: from_email.into(),
            ..Default::default()
        }
    }

    pub fn with_code_ttl(mut self, ttl: Duration) -> Self {
        self.code_ttl = ttl;
        self
    }

    pub fn with_from_name(mut self, name: impl Into<String>) -> Self {
        self.from_name = name.into();
        self
    }

    pub(crate) fn sender(&self) -> Mailbox {
        Mailbox::new(self.from_email.clone(), self.from_name.clone())
    }

    pub(crate) fn recipient(&self, email: &str) -> Mailbox {
        Mailbox::new(email, self.recipient_name.clone())
    }
}
