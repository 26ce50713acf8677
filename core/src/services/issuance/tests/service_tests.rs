//! Unit tests for the issuance service

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{IssuanceRequest, OtpCode, CODE_LENGTH};
use crate::errors::IssuanceError;
use crate::services::issuance::{IssuanceConfig, IssuanceService};

use super::mocks::{MockCodeStore, MockNotifier};

fn create_service(
    store_fails: bool,
    notifier_fails: bool,
) -> (
    IssuanceService<MockCodeStore, MockNotifier>,
    Arc<MockCodeStore>,
    Arc<MockNotifier>,
) {
    let code_store = Arc::new(MockCodeStore::new(store_fails));
    let notifier = Arc::new(MockNotifier::new(notifier_fails));
    let config = IssuanceConfig::new("pilot@misfits.fr");
    let service = IssuanceService::new(code_store.clone(), notifier.clone(), config);
    (service, code_store, notifier)
}

fn valid_request() -> IssuanceRequest {
    IssuanceRequest::new("a".repeat(32), "user@example.com")
}

#[tokio::test]
async fn test_issue_success() {
    let (service, code_store, notifier) = create_service(false, false);

    let result = service.issue(&valid_request()).await;
    assert!(result.is_ok());

    // Store holds a 6-digit code for the recipient
    let stored = code_store.get_code("user@example.com").expect("code should be stored");
    assert_eq!(stored.as_str().len(), CODE_LENGTH);
    assert!(stored.as_str().chars().all(|c| c.is_ascii_digit()));
    assert_eq!(code_store.get_ttl("user@example.com"), Some(Duration::from_secs(300)));

    // Notifier invoked exactly once with the code in the text body
    assert_eq!(notifier.send_count(), 1);
    let message = notifier.last_message().unwrap();
    assert_eq!(message.to.email, "user@example.com");
    assert_eq!(message.to.name.as_deref(), Some("passenger 1"));
    assert_eq!(message.from.email, "pilot@misfits.fr");
    assert_eq!(message.from.name.as_deref(), Some("Misfits Pilot"));
    assert_eq!(message.subject, "Your OTP");
    assert_eq!(message.text_body, format!("Your OTP is {}", stored));
}

#[tokio::test]
async fn test_short_api_key_touches_no_collaborator() {
    let (service, code_store, notifier) = create_service(false, false);

    let request = IssuanceRequest::new("a".repeat(10), "user@example.com");
    let result = service.issue(&request).await;

    assert_eq!(result, Err(IssuanceError::InvalidApiKey));
    assert_eq!(code_store.put_count(), 0);
    assert_eq!(notifier.send_count(), 0);
}

#[tokio::test]
async fn test_invalid_email_touches_no_collaborator() {
    let (service, code_store, notifier) = create_service(false, false);

    let request = IssuanceRequest::new("a".repeat(32), "not-an-email");
    let result = service.issue(&request).await;

    assert_eq!(result, Err(IssuanceError::InvalidEmailFormat));
    assert_eq!(code_store.put_count(), 0);
    assert_eq!(notifier.send_count(), 0);
}

#[tokio::test]
async fn test_send_failure_keeps_stored_code() {
    let (service, code_store, notifier) = create_service(false, true);

    let result = service.issue(&valid_request()).await;

    match result {
        Err(IssuanceError::SendFailed { message }) => {
            assert!(message.contains("Mail transport error"));
        }
        other => panic!("Expected SendFailed, got {:?}", other),
    }
    assert_eq!(notifier.send_count(), 1);
    assert!(code_store.get_code("user@example.com").is_some());
}

#[tokio::test]
async fn test_store_failure_skips_notifier() {
    let (service, code_store, notifier) = create_service(true, false);

    let result = service.issue(&valid_request()).await;

    match result {
        Err(IssuanceError::StoreUnavailable { message }) => {
            assert!(message.contains("Cache service error"));
        }
        other => panic!("Expected StoreUnavailable, got {:?}", other),
    }
    assert_eq!(code_store.put_count(), 1);
    assert_eq!(notifier.send_count(), 0);
}

#[tokio::test]
async fn test_second_issue_overwrites_first() {
    let (service, code_store, notifier) = create_service(false, false);

    service.issue(&valid_request()).await.unwrap();
    let first_sent = notifier.last_message().unwrap();

    service.issue(&valid_request()).await.unwrap();
    let second_sent = notifier.last_message().unwrap();

    // Only the code delivered by the second call is retrievable
    let stored = code_store.get_code("user@example.com").unwrap();
    assert_eq!(second_sent.text_body, format!("Your OTP is {}", stored));
    assert_eq!(code_store.codes.lock().unwrap().len(), 1);
    assert_eq!(code_store.put_count(), 2);
    assert_eq!(notifier.send_count(), 2);
    assert!(first_sent.text_body.starts_with("Your OTP is "));
}

#[tokio::test]
async fn test_custom_ttl_is_passed_to_store() {
    let code_store = Arc::new(MockCodeStore::new(false));
    let notifier = Arc::new(MockNotifier::new(false));
    let config = IssuanceConfig::new("pilot@misfits.fr").with_code_ttl(Duration::from_secs(60));
    let service = IssuanceService::new(code_store.clone(), notifier, config);

    service.issue(&valid_request()).await.unwrap();

    assert_eq!(code_store.get_ttl("user@example.com"), Some(Duration::from_secs(60)));
}

#[tokio::test]
async fn test_issue_from_json() {
    let (service, code_store, notifier) = create_service(false, false);

    let body = format!(r#"{{"apiKey":"{}","email":"user@example.com"}}"#, "b".repeat(32));
    service.issue_from_json(body.as_bytes()).await.unwrap();

    assert!(code_store.get_code("user@example.com").is_some());
    assert_eq!(notifier.send_count(), 1);
}

#[tokio::test]
async fn test_malformed_json_touches_no_collaborator() {
    let (service, code_store, notifier) = create_service(false, false);

    let result = service.issue_from_json(b"{\"apiKey\":").await;

    assert!(matches!(result, Err(IssuanceError::MalformedRequest { .. })));
    assert_eq!(code_store.put_count(), 0);
    assert_eq!(notifier.send_count(), 0);
}

#[tokio::test]
async fn test_missing_fields_fail_validation() {
    let (service, code_store, _notifier) = create_service(false, false);

    let result = service.issue_from_json(b"{}").await;

    assert_eq!(result, Err(IssuanceError::InvalidApiKey));
    assert_eq!(code_store.put_count(), 0);
}

#[tokio::test]
async fn test_service_works_behind_trait_objects() {
    use crate::services::issuance::{CodeStore, Notifier};

    let code_store = Arc::new(MockCodeStore::new(false));
    let notifier = Arc::new(MockNotifier::new(false));
    let dyn_store: Arc<dyn CodeStore> = code_store.clone();
    let dyn_notifier: Arc<dyn Notifier> = notifier.clone();

    let service = IssuanceService::new(dyn_store, dyn_notifier, IssuanceConfig::new("pilot@misfits.fr"));
    service.issue(&valid_request()).await.unwrap();

    let stored: OtpCode = code_store.get_code("user@example.com").unwrap();
    assert_eq!(notifier.last_message().unwrap().text_body, format!("Your OTP is {}", stored));
}
