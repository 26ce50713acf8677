//! Mailjet Mail Transport
//!
//! Sends messages through the Mailjet v3.1 send API with HTTP basic auth
//! (API key as user, API secret as password). Each message goes out once;
//! delivery failures are reported to the caller, never retried.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use otp_core::domain::entities::{EmailMessage, Mailbox};
use otp_core::services::issuance::Notifier;
use otp_shared::config::MailConfig;
use otp_shared::email::mask_email;

use crate::InfrastructureError;

/// Request body of `POST /v3.1/send`
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SendRequest<'a> {
    pub messages: Vec<MessagePayload<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct MessagePayload<'a> {
    pub from: Recipient<'a>,
    pub to: Vec<Recipient<'a>>,
    pub subject: &'a str,
    pub text_part: &'a str,
    #[serde(rename = "HTMLPart")]
    pub html_part: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Recipient<'a> {
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

impl<'a> From<&'a Mailbox> for Recipient<'a> {
    fn from(mailbox: &'a Mailbox) -> Self {
        Self {
            email: &mailbox.email,
            name: mailbox.name.as_deref(),
        }
    }
}

/// Response body of `POST /v3.1/send`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SendResponse {
    #[serde(default)]
    pub messages: Vec<MessageResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct MessageResult {
    pub status: String,
}

/// Build the Mailjet request body for one message
pub(crate) fn build_payload(message: &EmailMessage) -> SendRequest<'_> {
    SendRequest {
        messages: vec![MessagePayload {
            from: Recipient::from(&message.from),
            to: vec![Recipient::from(&message.to)],
            subject: &message.subject,
            text_part: &message.text_body,
            html_part: &message.html_body,
        }],
    }
}

/// Interpret a decoded send response
pub(crate) fn check_response(response: &SendResponse) -> Result<(), InfrastructureError> {
    match response.messages.first() {
        Some(result) if result.status == "success" => Ok(()),
        Some(result) => Err(InfrastructureError::Mail(format!(
            "Mailjet rejected message with status: {}",
            result.status
        ))),
        None => Err(InfrastructureError::Mail(
            "Mailjet response contained no message results".to_string(),
        )),
    }
}

/// Mailjet email transport
pub struct MailjetNotifier {
    client: Client,
    api_url: String,
    api_key: String,
    api_secret: String,
}

impl MailjetNotifier {
    /// Create a new Mailjet transport
    ///
    /// Fails when the API key, the resolved secret or the sender address is
    /// empty, so a misconfigured deployment is caught at startup.
    pub fn new(config: &MailConfig, api_secret: String) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_SERVER_API_KEY not set".to_string(),
            ));
        }
        if api_secret.is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_SERVER_API_SECRET not set".to_string(),
            ));
        }
        if config.from_email.is_empty() {
            return Err(InfrastructureError::Config("FROM_EMAIL not set".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(
            "Mailjet transport initialized with sender: {}",
            mask_email(&config.from_email)
        );

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            api_secret,
        })
    }

    /// Send one message
    pub async fn send_message(&self, message: &EmailMessage) -> Result<(), InfrastructureError> {
        let masked = mask_email(&message.to.email);
        debug!("Sending email to {} via Mailjet", masked);

        let response = self
            .client
            .post(&self.api_url)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .json(&build_payload(message))
            .send()
            .await
            .map_err(|e| {
                error!("Request to Mailjet failed: {}", e);
                InfrastructureError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Mailjet error ({}): {}", status, body);
            return Err(InfrastructureError::Mail(format!(
                "Mailjet returned {}",
                status
            )));
        }

        let decoded: SendResponse = response.json().await?;
        check_response(&decoded)?;

        info!(
            target: "mail_service",
            provider = "mailjet",
            recipient = %masked,
            "Email sent successfully"
        );
        Ok(())
    }
}

#[async_trait]
impl Notifier for MailjetNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), String> {
        self.send_message(message).await.map_err(|e| e.to_string())
    }
}
