use actix_web::HttpResponse;

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    tracing::debug!("Server is healthy");
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "otp-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
