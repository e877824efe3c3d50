use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::{debug, info};

use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::config::GeminiConfig;
use crate::error::{SearchFailure, UpstreamError};
use crate::models::SearchResult;
use crate::utils::generate_price_search_prompt;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Looks up prices for one product through a search-grounded model.
///
/// Implementations do no validation of their own: whatever string they are
/// given is sent upstream.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, product_name: &str) -> Result<SearchResult, SearchFailure>;
}

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        // A key with bytes a header can't carry is sent without one; the upstream
        // then rejects the call like any other bad key.
        if let Ok(key) = HeaderValue::from_str(self.config.api_key.trim()) {
            headers.insert(API_KEY_HEADER, key);
        }
        headers
    }

    async fn generate(&self, prompt: String) -> Result<GenerateContentResponse, UpstreamError> {
        let response = self
            .http
            .post(self.endpoint())
            .headers(self.headers())
            .json(&GenerateContentRequest::grounded(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(UpstreamError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SearchClient for GeminiClient {
    async fn search(&self, product_name: &str) -> Result<SearchResult, SearchFailure> {
        debug!(model = %self.config.model, product = product_name, "Gemini search request");

        let response = self
            .generate(generate_price_search_prompt(product_name))
            .await?;
        let result = response.into_search_result();

        info!(
            product = product_name,
            citations = result.citations.len(),
            "Gemini search completed"
        );
        Ok(result)
    }
}
