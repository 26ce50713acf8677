//! Issuance pipeline implementation

use std::sync::Arc;

use otp_shared::email::mask_email;

use crate::domain::entities::{EmailMessage, IssuanceRequest, OtpCode};
use crate::errors::{IssuanceError, IssuanceResult};

use super::config::IssuanceConfig;
use super::traits::{CodeStore, Notifier};
use super::validator::Validator;

/// Issues one-time codes: validate, generate, store, send
///
/// Stages run in order and the first failure ends the request. Nothing is
/// rolled back: a send failure leaves the freshly stored code active, and a
/// store failure leaves whatever the store held before.
pub struct IssuanceService<S: CodeStore + ?Sized, N: Notifier + ?Sized> {
    /// Expiring store for the active code
    code_store: Arc<S>,
    /// Email transport
    notifier: Arc<N>,
    /// Service configuration
    config: IssuanceConfig,
}

impl<S: CodeStore + ?Sized, N: Notifier + ?Sized> IssuanceService<S, N> {
    /// Create a new issuance service
    ///
    /// # Arguments
    ///
    /// * `code_store` - Store implementation, shared across requests
    /// * `notifier` - Transport implementation, shared across requests
    /// * `config` - Service configuration
    pub fn new(code_store: Arc<S>, notifier: Arc<N>, config: IssuanceConfig) -> Self {
        Self {
            code_store,
            notifier,
            config,
        }
    }

    /// Parse a raw JSON body and run the pipeline on it
    pub async fn issue_from_json(&self, body: &[u8]) -> IssuanceResult<()> {
        let request = IssuanceRequest::from_json(body).map_err(|e| {
            tracing::warn!(event = "malformed_request", error = %e, "Rejected issuance request");
            e
        })?;
        self.issue(&request).await
    }

    /// Issue a code to the request's recipient
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The code was stored and handed to the transport
    /// * `Err(IssuanceError)` - The stage that failed
    pub async fn issue(&self, request: &IssuanceRequest) -> IssuanceResult<()> {
        let recipient = request.email.as_str();

        if let Err(e) = Validator::validate(request) {
            tracing::warn!(
                recipient = %mask_email(recipient),
                error_code = e.error_code(),
                event = "validation_failed",
                "Rejected issuance request"
            );
            return Err(e);
        }

        let code = OtpCode::generate();

        tracing::info!(
            recipient = %mask_email(recipient),
            event = "otp_generated",
            "Generated new one-time code"
        );

        self.code_store
            .put(recipient, &code, self.config.code_ttl)
            .await
            .map_err(|e| {
                tracing::error!(
                    recipient = %mask_email(recipient),
                    error = %e,
                    event = "otp_storage_failed",
                    "Failed to store one-time code"
                );
                IssuanceError::StoreUnavailable { message: e }
            })?;

        tracing::debug!(
            recipient = %mask_email(recipient),
            ttl_secs = self.config.code_ttl.as_secs(),
            "Stored one-time code"
        );

        let message = EmailMessage::otp_notification(
            self.config.sender(),
            self.config.recipient(recipient),
            &self.config.subject,
            &code,
        );

        self.notifier.send(&message).await.map_err(|e| {
            // The stored code stays active; the recipient never received it.
            tracing::error!(
                recipient = %mask_email(recipient),
                error = %e,
                event = "otp_delivery_failed",
                "Failed to send one-time code"
            );
            IssuanceError::SendFailed { message: e }
        })?;

        tracing::info!(
            recipient = %mask_email(recipient),
            event = "otp_sent",
            "Sent one-time code"
        );

        Ok(())
    }
}
