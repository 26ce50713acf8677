use actix_web::{http::StatusCode, web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;

use otp_core::services::issuance::{CodeStore, IssuanceService, Notifier};

use crate::handlers::error::{issuance_error_response, plain_text};

/// Application state that holds shared services
pub struct AppState<S: CodeStore + ?Sized, N: Notifier + ?Sized> {
    pub issuance_service: Arc<IssuanceService<S, N>>,
}

impl<S: CodeStore + ?Sized, N: Notifier + ?Sized> AppState<S, N> {
    pub fn new(issuance_service: IssuanceService<S, N>) -> Self {
        Self {
            issuance_service: Arc::new(issuance_service),
        }
    }
}

/// Handler for POST /api
///
/// Issues a one-time code to the email in the body.
///
/// # Request Body
///
/// ```json
/// {
///     "apiKey": "0123456789abcdef0123456789abcdef",
///     "email": "user@example.com"
/// }
/// ```
///
/// # Response
///
/// * `200 OK` with an empty body once the code is stored and sent
/// * `400 Bad Request` with a plain-text reason for a malformed body, a bad
///   API key or a bad email
/// * `500 Internal Server Error` with a plain-text reason when the store or
///   the transport fails
///
/// The body is taken as raw bytes so malformed JSON gets the same
/// plain-text treatment as every other rejection.
pub async fn issue_otp<S, N>(
    state: web::Data<AppState<S, N>>,
    body: web::Bytes,
) -> HttpResponse
where
    S: CodeStore + ?Sized + 'static,
    N: Notifier + ?Sized + 'static,
{
    let request_id = Uuid::new_v4();
    tracing::debug!(%request_id, body_len = body.len(), "Processing issuance request");

    match state.issuance_service.issue_from_json(&body).await {
        Ok(()) => {
            tracing::info!(%request_id, "Issuance request completed");
            HttpResponse::Ok().finish()
        }
        Err(e) => {
            tracing::info!(
                %request_id,
                error_code = e.error_code(),
                "Issuance request failed"
            );
            issuance_error_response(&e)
        }
    }
}

/// Fallback for any other method on /api
pub async fn method_not_allowed() -> HttpResponse {
    plain_text(StatusCode::METHOD_NOT_ALLOWED, "Invalid request method")
}
