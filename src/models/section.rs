use serde::{Deserialize, Serialize};

/// A run of inline text inside one body line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Emphasis(String),
}

/// One body line, as a sequence of inline runs.
pub type Line = Vec<Inline>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    AuthenticityAnalysis,
    BestPrice,
    PriceTable,
    Advice,
    Generic,
}

/// A `###` block of the model's answer, classified for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplaySection {
    AuthenticityAnalysis {
        title: String,
        lines: Vec<Line>,
    },
    BestPrice {
        title: String,
        body: String,
    },
    PriceTable {
        title: String,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Advice {
        title: String,
        lines: Vec<Line>,
    },
    Generic {
        title: String,
        lines: Vec<Line>,
    },
}

impl DisplaySection {
    pub fn kind(&self) -> SectionKind {
        match self {
            DisplaySection::AuthenticityAnalysis { .. } => SectionKind::AuthenticityAnalysis,
            DisplaySection::BestPrice { .. } => SectionKind::BestPrice,
            DisplaySection::PriceTable { .. } => SectionKind::PriceTable,
            DisplaySection::Advice { .. } => SectionKind::Advice,
            DisplaySection::Generic { .. } => SectionKind::Generic,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            DisplaySection::AuthenticityAnalysis { title, .. }
            | DisplaySection::BestPrice { title, .. }
            | DisplaySection::PriceTable { title, .. }
            | DisplaySection::Advice { title, .. }
            | DisplaySection::Generic { title, .. } => title,
        }
    }
}
