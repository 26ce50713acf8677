use actix_web::{http::StatusCode, test, web};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use otp_api::{app::create_app, routes::AppState};
use otp_core::domain::entities::OtpCode;
use otp_core::services::issuance::{CodeStore, IssuanceConfig, IssuanceService, Notifier};
use otp_infra::cache::InMemoryCodeStore;
use otp_infra::mail::MockMailer;

/// Store that refuses every write
#[derive(Default)]
struct FailingStore {
    calls: AtomicUsize,
}

#[async_trait]
impl CodeStore for FailingStore {
    async fn put(&self, _recipient: &str, _code: &OtpCode, _ttl: Duration) -> Result<(), String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err("connection refused".to_string())
    }
}

fn state<S: CodeStore + ?Sized + 'static, N: Notifier + ?Sized + 'static>(
    store: Arc<S>,
    notifier: Arc<N>,
) -> web::Data<AppState<S, N>> {
    let service = IssuanceService::new(store, notifier, IssuanceConfig::new("pilot@misfits.fr"));
    web::Data::new(AppState::new(service))
}

fn body(api_key: &str, email: &str) -> serde_json::Value {
    serde_json::json!({ "apiKey": api_key, "email": email })
}

#[actix_web::test]
async fn test_issue_otp_success() {
    let store = Arc::new(InMemoryCodeStore::new());
    let mailer = Arc::new(MockMailer::new());
    let app = test::init_service(create_app(state(store.clone(), mailer.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api")
        .set_json(body(&"a".repeat(32), "user@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(test::read_body(resp).await.is_empty());

    let stored = store.get("user@example.com").await.expect("code should be stored");
    assert_eq!(stored.as_str().len(), 6);
    assert_eq!(mailer.get_message_count(), 1);
    assert_eq!(
        mailer.last_message().unwrap().text_body,
        format!("Your OTP is {}", stored)
    );
}

#[actix_web::test]
async fn test_short_api_key_is_rejected() {
    let store = Arc::new(InMemoryCodeStore::new());
    let mailer = Arc::new(MockMailer::new());
    let app = test::init_service(create_app(state(store.clone(), mailer.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api")
        .set_json(body(&"a".repeat(10), "user@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "Invalid API key");
    assert!(store.is_empty().await);
    assert_eq!(mailer.get_message_count(), 0);
}

#[actix_web::test]
async fn test_invalid_email_is_rejected() {
    let store = Arc::new(InMemoryCodeStore::new());
    let mailer = Arc::new(MockMailer::new());
    let app = test::init_service(create_app(state(store.clone(), mailer.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api")
        .set_json(body(&"a".repeat(32), "not-an-email"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "Invalid email format");
    assert!(store.is_empty().await);
    assert_eq!(mailer.get_message_count(), 0);
}

#[actix_web::test]
async fn test_send_failure_returns_500_and_keeps_code() {
    let store = Arc::new(InMemoryCodeStore::new());
    let mailer = Arc::new(MockMailer::new());
    mailer.set_simulate_failure(true);
    let app = test::init_service(create_app(state(store.clone(), mailer.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api")
        .set_json(body(&"a".repeat(32), "user@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = test::read_body(resp).await;
    assert!(std::str::from_utf8(&text).unwrap().starts_with("Failed to send OTP"));
    assert!(store.get("user@example.com").await.is_some());
}

#[actix_web::test]
async fn test_store_failure_returns_500_without_sending() {
    let store = Arc::new(FailingStore::default());
    let mailer = Arc::new(MockMailer::new());
    let app = test::init_service(create_app(state(store.clone(), mailer.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api")
        .set_json(body(&"a".repeat(32), "user@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = test::read_body(resp).await;
    assert_eq!(text, "Failed to store OTP: connection refused");
    assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    assert_eq!(mailer.get_message_count(), 0);
}

#[actix_web::test]
async fn test_malformed_body_is_rejected() {
    let store = Arc::new(InMemoryCodeStore::new());
    let mailer = Arc::new(MockMailer::new());
    let app = test::init_service(create_app(state(store.clone(), mailer.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"apiKey\": 42")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let text = test::read_body(resp).await;
    assert!(std::str::from_utf8(&text).unwrap().starts_with("Malformed request"));
    assert_eq!(mailer.get_message_count(), 0);
}

#[actix_web::test]
async fn test_get_on_api_is_method_not_allowed() {
    let store = Arc::new(InMemoryCodeStore::new());
    let mailer = Arc::new(MockMailer::new());
    let app = test::init_service(create_app(state(store, mailer.clone()))).await;

    let req = test::TestRequest::get().uri("/api").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(test::read_body(resp).await, "Invalid request method");
    assert_eq!(mailer.get_message_count(), 0);
}

#[actix_web::test]
async fn test_trait_object_state() {
    let store = Arc::new(InMemoryCodeStore::new());
    let dyn_store: Arc<dyn CodeStore> = store.clone();
    let dyn_notifier: Arc<dyn Notifier> = Arc::new(MockMailer::new());
    let app = test::init_service(create_app(state(dyn_store, dyn_notifier))).await;

    let req = test::TestRequest::post()
        .uri("/api")
        .set_json(body(&"c".repeat(32), "pilot.two@misfits.fr"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(store.get("pilot.two@misfits.fr").await.is_some());
}

#[actix_web::test]
async fn test_array_body_is_rejected() {
    let store = Arc::new(InMemoryCodeStore::new());
    let mailer = Arc::new(MockMailer::new());
    let app = test::init_service(create_app(state(store.clone(), mailer.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api")
        .set_json(serde_json::json!([&"a".repeat(32), "user@example.com"]))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let text = test::read_body(resp).await;
    assert!(std::str::from_utf8(&text).unwrap().starts_with("Malformed request"));
    assert!(store.is_empty().await);
    assert_eq!(mailer.get_message_count(), 0);
}
