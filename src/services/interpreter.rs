//! Turns the model's markdown answer into typed display sections.
//!
//! Classification keys on the headings requested in
//! [`crate::utils::prompts`]; the two must change together.

use crate::models::{DisplaySection, Inline, Line};

const SECTION_MARKER: &str = "###";
const EMPHASIS_MARKER: &str = "**";

const AUTHENTICITY_KEYS: &[&str] = &["渠道可信度", "真伪分析"];
const BEST_PRICE_KEYS: &[&str] = &["最佳价格", "价格结论"];
const PRICE_TABLE_KEYS: &[&str] = &["价格详情表"];
const ADVICE_KEYS: &[&str] = &["购买建议", "避坑"];

/// A `###` fragment split into its heading and body, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

impl RawSection<'_> {
    #[cfg(test)]
    pub fn to_markdown(&self) -> String {
        format!("{} {}\n{}", SECTION_MARKER, self.title, self.body)
    }
}

pub fn interpret(text: &str) -> Vec<DisplaySection> {
    split_sections(text).into_iter().map(classify).collect()
}

pub fn split_sections(text: &str) -> Vec<RawSection<'_>> {
    text.split(SECTION_MARKER)
        .filter(|fragment| !fragment.is_empty())
        .map(str::trim)
        .map(|fragment| match fragment.split_once('\n') {
            Some((title, body)) => RawSection {
                title: title.trim(),
                body: body.trim(),
            },
            None => RawSection {
                title: fragment,
                body: "",
            },
        })
        .collect()
}

pub fn classify(section: RawSection<'_>) -> DisplaySection {
    let RawSection { title, body } = section;
    let title_has = |keys: &[&str]| keys.iter().any(|key| title.contains(key));

    if title_has(AUTHENTICITY_KEYS) {
        return DisplaySection::AuthenticityAnalysis {
            title: title.to_string(),
            lines: emphasize_lines(body),
        };
    }

    if title_has(BEST_PRICE_KEYS) {
        return DisplaySection::BestPrice {
            title: title.to_string(),
            body: body.to_string(),
        };
    }

    if title_has(PRICE_TABLE_KEYS) {
        if let Some((headers, rows)) = parse_table(body) {
            return DisplaySection::PriceTable {
                title: title.to_string(),
                headers,
                rows,
            };
        }
        tracing::debug!(title, "price table has too few rows, rendering as text");
    }

    if title_has(ADVICE_KEYS) {
        return DisplaySection::Advice {
            title: title.to_string(),
            lines: emphasize_lines(body),
        };
    }

    DisplaySection::Generic {
        title: title.to_string(),
        lines: emphasize_lines(body),
    }
}

/// Header cells and data rows of a pipe table, or `None` when the body has
/// fewer than three pipe lines (header, separator, one row).
pub fn parse_table(body: &str) -> Option<(Vec<String>, Vec<Vec<String>>)> {
    let table_lines: Vec<&str> = body
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('|'))
        .collect();

    if table_lines.len() < 3 {
        return None;
    }

    let headers = table_lines[0]
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect();

    let rows = table_lines[2..]
        .iter()
        .map(|line| {
            let cells: Vec<&str> = line.split('|').collect();
            let inner = if cells.len() >= 2 {
                &cells[1..cells.len() - 1]
            } else {
                &cells[..0]
            };
            inner.iter().map(|cell| cell.trim().to_string()).collect()
        })
        .collect();

    Some((headers, rows))
}

fn emphasize_lines(body: &str) -> Vec<Line> {
    if body.is_empty() {
        return Vec::new();
    }
    body.split('\n').map(emphasize).collect()
}

/// Splits one line into plain and emphasized runs. `**x**` pairs are matched
/// leftmost-first; a marker with no closing partner stays literal.
pub fn emphasize(line: &str) -> Line {
    let mut runs = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find(EMPHASIS_MARKER) {
        let after_open = &rest[open + EMPHASIS_MARKER.len()..];
        let Some(close) = after_open.find(EMPHASIS_MARKER) else {
            break;
        };
        if open > 0 {
            runs.push(Inline::Text(rest[..open].to_string()));
        }
        runs.push(Inline::Emphasis(after_open[..close].to_string()));
        rest = &after_open[close + EMPHASIS_MARKER.len()..];
    }

    if !rest.is_empty() || runs.is_empty() {
        runs.push(Inline::Text(rest.to_string()));
    }
    runs
}
