use std::collections::HashSet;

use url::Url;

use crate::models::{Citation, SourceLink};

const UNTITLED_SOURCE: &str = "未知网页";

/// Keeps the first citation for each distinct URI, in original order.
/// Citations without a URI are dropped.
pub fn dedupe_citations(citations: &[Citation]) -> Vec<Citation> {
    let mut seen = HashSet::new();
    citations
        .iter()
        .filter(|citation| citation.link().is_some_and(|uri| seen.insert(uri)))
        .cloned()
        .collect()
}

pub fn source_links(citations: &[Citation]) -> Vec<SourceLink> {
    dedupe_citations(citations)
        .into_iter()
        .filter_map(|citation| {
            let uri = citation.uri.filter(|uri| !uri.is_empty())?;
            let title = citation
                .title
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| UNTITLED_SOURCE.to_string());
            let host = host_of(&uri);
            Some(SourceLink { uri, title, host })
        })
        .collect()
}

fn host_of(uri: &str) -> String {
    Url::parse(uri)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| uri.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn untitled() -> Citation {
        Citation::default()
    }

    #[test]
    fn keeps_first_occurrence_and_drops_missing_uris() {
        let input = vec![
            Citation::new("https://u1", "A"),
            Citation::new("https://u2", "B"),
            Citation::new("https://u1", "C"),
            untitled(),
            Citation::new("https://u3", "D"),
        ];
        assert_eq!(
            dedupe_citations(&input),
            vec![
                Citation::new("https://u1", "A"),
                Citation::new("https://u2", "B"),
                Citation::new("https://u3", "D"),
            ]
        );
    }

    #[test]
    fn empty_uri_counts_as_missing() {
        let input = vec![Citation::new("", "blank"), Citation::new("https://a", "a")];
        assert_eq!(dedupe_citations(&input), vec![Citation::new("https://a", "a")]);
    }

    #[test]
    fn output_is_unique_and_order_preserving() {
        let uris = ["c", "a", "c", "b", "a", "d", "b"];
        let input: Vec<Citation> = uris
            .iter()
            .map(|u| Citation::new(format!("https://{}", u), *u))
            .collect();
        let out: Vec<String> = dedupe_citations(&input)
            .into_iter()
            .filter_map(|c| c.uri)
            .collect();
        assert_eq!(out, vec!["https://c", "https://a", "https://b", "https://d"]);
    }

    #[test]
    fn source_links_fill_title_and_host() {
        let input = vec![
            Citation {
                uri: Some("https://item.jd.com/100042.html".to_string()),
                title: None,
            },
            Citation::new("https://www.apple.com.cn/airpods-pro/", "AirPods Pro - Apple"),
            Citation::new("not a url", "raw"),
        ];
        let links = source_links(&input);
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].title, "未知网页");
        assert_eq!(links[0].host, "item.jd.com");
        assert_eq!(links[1].host, "www.apple.com.cn");
        assert_eq!(links[2].host, "not a url");
    }

    #[test]
    fn no_citations_no_links() {
        assert!(source_links(&[]).is_empty());
    }
}
