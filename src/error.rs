use thiserror::Error;

/// Message shown to the user for every failed search.
pub const SEARCH_FAILURE_MESSAGE: &str = "搜索失败，请检查网络或API Key配置。";

/// What actually went wrong talking to the upstream. Logged, never shown.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The single error a search can surface to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SearchFailure {
    message: &'static str,
}

impl SearchFailure {
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl Default for SearchFailure {
    fn default() -> Self {
        Self {
            message: SEARCH_FAILURE_MESSAGE,
        }
    }
}

impl From<UpstreamError> for SearchFailure {
    fn from(err: UpstreamError) -> Self {
        tracing::error!(error = %err, "Gemini API error");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_detail_is_not_carried_into_failure() {
        let err = UpstreamError::Status {
            status: reqwest::StatusCode::FORBIDDEN,
            body: "API key not valid".to_string(),
        };
        let failure = SearchFailure::from(err);
        assert_eq!(failure.to_string(), SEARCH_FAILURE_MESSAGE);
        assert!(!failure.message().contains("API key not valid"));
    }
}
