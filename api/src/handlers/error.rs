//! Mapping from issuance failures to HTTP responses
//!
//! Every failure is answered with a `text/plain` reason: client errors as
//! `400 Bad Request`, store and transport failures as
//! `500 Internal Server Error`.

use actix_web::{http::StatusCode, HttpResponse};

use otp_core::errors::IssuanceError;

/// Status code for an issuance failure
pub fn status_code(error: &IssuanceError) -> StatusCode {
    if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Plain-text response for an issuance failure
pub fn issuance_error_response(error: &IssuanceError) -> HttpResponse {
    plain_text(status_code(error), error.to_string())
}

/// Plain-text response with the given status
pub fn plain_text(status: StatusCode, reason: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/plain; charset=utf-8")
        .body(reason.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        let errors = [
            IssuanceError::MalformedRequest {
                message: "expected value".to_string(),
            },
            IssuanceError::InvalidApiKey,
            IssuanceError::InvalidEmailFormat,
        ];

        for error in &errors {
            assert_eq!(status_code(error), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_collaborator_errors_map_to_500() {
        let store = IssuanceError::StoreUnavailable {
            message: "connection refused".to_string(),
        };
        let send = IssuanceError::SendFailed {
            message: "timeout".to_string(),
        };

        assert_eq!(status_code(&store), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_code(&send), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_is_plain_text() {
        let response = issuance_error_response(&IssuanceError::InvalidApiKey);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
