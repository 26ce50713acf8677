//! Application factory
//!
//! Builds the actix-web application around a shared issuance service.

use actix_web::{web, App};
use tracing_actix_web::TracingLogger;

use otp_core::services::issuance::{CodeStore, Notifier};

use crate::routes::{
    health::health_check,
    otp::{issue_otp, method_not_allowed},
    AppState,
};

/// Create and configure the application
pub fn create_app<S, N>(
    app_state: web::Data<AppState<S, N>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: CodeStore + ?Sized + 'static,
    N: Notifier + ?Sized + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::resource("/api")
                .route(web::post().to(issue_otp::<S, N>))
                .default_service(web::to(method_not_allowed)),
        )
}
