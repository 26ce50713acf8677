use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use std::time::Duration;
use tracing::info;

use otp_api::{app::create_app, logging::init_logging, routes::AppState};
use otp_core::services::issuance::{CodeStore, IssuanceConfig, IssuanceService, Notifier};
use otp_infra::{cache::create_code_store, mail::create_notifier, secrets::resolve_mail_secret};
use otp_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = AppConfig::from_env();
    init_logging(&config.logging);

    info!(
        environment = %config.environment,
        "Starting OTP issuance server"
    );

    // Collaborators are built once and shared by every worker
    let code_store = create_code_store(&config.cache)
        .await
        .context("failed to initialize code store")?;

    let api_secret = resolve_mail_secret(&config.mail)
        .await
        .context("failed to resolve mail transport secret")?;
    let notifier =
        create_notifier(&config.mail, api_secret).context("failed to initialize mail transport")?;

    let issuance_config = IssuanceConfig::new(config.mail.from_email.clone())
        .with_from_name(config.mail.from_name.clone())
        .with_code_ttl(Duration::from_secs(config.cache.code_ttl));

    let app_state: web::Data<AppState<dyn CodeStore, dyn Notifier>> = web::Data::new(
        AppState::new(IssuanceService::new(code_store, notifier, issuance_config)),
    );

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
