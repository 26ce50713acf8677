//! Mock Mail Transport
//!
//! Logs messages instead of sending them and keeps a copy of each for
//! inspection in tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use otp_core::domain::entities::EmailMessage;
use otp_core::services::issuance::Notifier;
use otp_shared::email::mask_email;

use crate::InfrastructureError;

/// Mock mail transport for development and testing
#[derive(Clone, Default)]
pub struct MockMailer {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Messages accepted so far
    outbox: Arc<Mutex<Vec<EmailMessage>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: Arc<AtomicBool>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Copies of every message sent
    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.outbox.lock().map(|o| o.clone()).unwrap_or_default()
    }

    pub fn last_message(&self) -> Option<EmailMessage> {
        self.outbox.lock().ok().and_then(|o| o.last().cloned())
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    pub async fn send_message(&self, message: &EmailMessage) -> Result<(), InfrastructureError> {
        let masked = mask_email(&message.to.email);

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!("Mock mailer simulating failure for {}", masked);
            return Err(InfrastructureError::Mail(
                "Simulated email sending failure".to_string(),
            ));
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.push(message.clone());
        }

        info!(
            target: "mail_service",
            provider = "mock",
            recipient = %masked,
            subject = %message.subject,
            message_number = count,
            "Email sent successfully (mock)"
        );
        Ok(())
    }
}

#[async_trait]
impl Notifier for MockMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), String> {
        self.send_message(message).await.map_err(|e| e.to_string())
    }
}
