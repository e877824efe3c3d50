use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{DisplaySection, SourceLink};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(max = 200))]
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Searching,
    Success,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub search_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub sections: Vec<DisplaySection>,
    pub sources: Vec<SourceLink>,
}

/// Everything the page needs to draw the current state.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub query: String,
    pub phase: Phase,
    pub loading: bool,
    pub has_searched: bool,
    pub report: Option<Report>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
    pub disclaimer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub api_key_configured: bool,
    pub model: String,
    pub uptime_seconds: u64,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
            timestamp: Utc::now(),
        }
    }
}
