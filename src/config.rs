use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub max_json_payload_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Empty when unset; the upstream rejects the call and the failure shows up at search time.
    #[serde(skip_serializing)]
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5733,
                workers: num_cpus::get(),
                max_json_payload_size: 16_384, // 16KB
            },
            gemini: GeminiConfig {
                api_key: String::new(),
                base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                model: "gemini-2.5-flash".to_string(),
            },
            security: SecurityConfig {
                allowed_origins: vec!["*".to_string()],
            },
        }
    }
}

impl GeminiConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Config::default();

        // Server configuration
        if let Ok(host) = env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.server.port = port.parse()?;
        }
        if let Ok(workers) = env::var("WORKERS") {
            config.server.workers = workers.parse()?;
        }
        if let Ok(max_json_payload_size) = env::var("MAX_JSON_PAYLOAD_SIZE") {
            config.server.max_json_payload_size = max_json_payload_size.parse()?;
        }

        // Upstream configuration
        if let Ok(api_key) = env::var("GEMINI_API_KEY").or_else(|_| env::var("API_KEY")) {
            config.gemini.api_key = api_key;
        }
        if let Ok(base_url) = env::var("GEMINI_BASE_URL") {
            config.gemini.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Ok(model) = env::var("GEMINI_MODEL") {
            config.gemini.model = model;
        }

        // Security configuration
        if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
            config.security.allowed_origins = allowed_origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        Ok(config)
    }
}
