use actix_web::{web, HttpResponse, Result};

use crate::models::{ErrorResponse, HealthResponse};
use crate::AppState;

pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    let api_key_configured = state.config.gemini.has_api_key();

    let response = HealthResponse {
        status: if api_key_configured { "healthy" } else { "degraded" }.to_string(),
        api_key_configured,
        model: state.config.gemini.model.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    Ok(HttpResponse::Ok().json(response))
}

pub async fn not_found() -> Result<HttpResponse> {
    Ok(HttpResponse::NotFound().json(ErrorResponse::new(
        "Endpoint not found"
    )))
}
