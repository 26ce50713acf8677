//! Unit tests for the error taxonomy

use super::IssuanceError;

#[test]
fn test_client_errors() {
    assert!(IssuanceError::InvalidApiKey.is_client_error());
    assert!(IssuanceError::InvalidEmailFormat.is_client_error());
    assert!(IssuanceError::MalformedRequest { message: "eof".into() }.is_client_error());
}

#[test]
fn test_collaborator_errors() {
    let store = IssuanceError::StoreUnavailable { message: "connection refused".into() };
    let send = IssuanceError::SendFailed { message: "401 Unauthorized".into() };

    assert!(!store.is_client_error());
    assert!(!send.is_client_error());
    assert_eq!(store.error_code(), "STORE_UNAVAILABLE");
    assert_eq!(send.error_code(), "SEND_FAILED");
}

#[test]
fn test_messages() {
    assert_eq!(IssuanceError::InvalidApiKey.to_string(), "Invalid API key");
    assert_eq!(IssuanceError::InvalidEmailFormat.to_string(), "Invalid email format");
    assert_eq!(
        IssuanceError::StoreUnavailable { message: "timeout".into() }.to_string(),
        "Failed to store OTP: timeout"
    );
    assert_eq!(
        IssuanceError::SendFailed { message: "rejected".into() }.to_string(),
        "Failed to send OTP: rejected"
    );
}
