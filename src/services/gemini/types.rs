use serde::{Deserialize, Serialize};

use crate::models::{Citation, SearchResult};

/// Shown in place of the answer when the upstream returns no text.
pub const MISSING_TEXT_PLACEHOLDER: &str = "未能获取价格信息，请稍后重试。";

// =============================================================================
// Request
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub tools: Vec<Tool>,
}

impl GenerateContentRequest {
    /// A single user turn with the Google Search tool enabled.
    pub fn grounded(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct GoogleSearch {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// =============================================================================
// Response
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebSource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct WebSource {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|part| part.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn citations(&self) -> Vec<Citation> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .iter()
                    .map(|chunk| match &chunk.web {
                        Some(web) => Citation {
                            uri: web.uri.clone(),
                            title: web.title.clone(),
                        },
                        None => Citation::default(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn into_search_result(self) -> SearchResult {
        let text = self.text().unwrap_or_else(|| {
            tracing::warn!("Gemini response carried no text, using placeholder");
            MISSING_TEXT_PLACEHOLDER.to_string()
        });
        SearchResult::new(text, self.citations())
    }
}
