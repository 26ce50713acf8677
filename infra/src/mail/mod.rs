//! Mail Transport Module
//!
//! Email transports for delivering issued codes. Mailjet is the production
//! transport; the mock logs messages for development.

use std::sync::Arc;

use otp_core::services::issuance::Notifier;
use otp_shared::config::{MailConfig, MailProvider};

use crate::InfrastructureError;

pub mod mailjet;
pub mod mock_mail;

pub use mailjet::MailjetNotifier;
pub use mock_mail::MockMailer;

#[cfg(test)]
mod tests;

/// Create the email transport selected by configuration
///
/// `api_secret` is the already resolved transport secret (see
/// [`crate::secrets::resolve_mail_secret`]); it is ignored by the mock.
pub fn create_notifier(
    config: &MailConfig,
    api_secret: String,
) -> Result<Arc<dyn Notifier>, InfrastructureError> {
    match config.provider {
        MailProvider::Mailjet => {
            let notifier = MailjetNotifier::new(config, api_secret)?;
            Ok(Arc::new(notifier))
        }
        MailProvider::Mock => {
            tracing::warn!("Using mock mail transport; messages are logged, not sent");
            Ok(Arc::new(MockMailer::new()))
        }
    }
}
