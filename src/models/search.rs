use serde::{Deserialize, Serialize};

/// One grounding citation as reported by the upstream search tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub uri: Option<String>,
    pub title: Option<String>,
}

impl Citation {
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            title: Some(title.into()),
        }
    }

    /// The URI when present and non-empty.
    pub fn link(&self) -> Option<&str> {
        self.uri.as_deref().filter(|uri| !uri.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    pub citations: Vec<Citation>,
}

impl SearchResult {
    pub fn new(text: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self {
            text: text.into(),
            citations,
        }
    }
}

/// Display form of a deduplicated citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    pub uri: String,
    pub title: String,
    pub host: String,
}
