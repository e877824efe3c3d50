mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Config, SecurityConfig};
use handlers::health::not_found;
use routes::api;
use services::{GeminiClient, SearchClient, ViewController};

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<ViewController>,
    pub config: Config,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config, client: Arc<dyn SearchClient>) -> Self {
        Self {
            controller: Arc::new(ViewController::new(client)),
            config,
            start_time: Instant::now(),
        }
    }
}

fn cors(security: &SecurityConfig) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if security.allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }
    security
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if !config.gemini.has_api_key() {
        warn!("GEMINI_API_KEY is not set; searches will fail until it is provided");
    }

    info!(
        "Starting price check service on port {} with model {}",
        config.server.port, config.gemini.model
    );

    let client: Arc<dyn SearchClient> = Arc::new(GeminiClient::new(config.gemini.clone()));
    let state = AppState::new(config.clone(), client);
    let max_json_payload_size = config.server.max_json_payload_size;

    // Create HTTP server
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().limit(max_json_payload_size))
            .wrap(cors(&state.config.security))
            .wrap(Logger::default())
            .route("/", web::get().to(handlers::index))
            .service(api::config())
            .default_service(web::route().to(not_found))
    })
    .bind(format!("{}:{}", config.server.host, config.server.port))?;

    info!(
        "Server started successfully at http://{}:{}",
        config.server.host, config.server.port
    );

    // Run the server
    server.workers(config.server.workers).run().await
}
