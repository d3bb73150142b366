//! One-shot item loading with a built-in fallback list.
//!
//! The list is fetched exactly once at startup, before any rendering. On
//! any failure the error is logged and a single placeholder item takes the
//! list's place, so the timeline is never empty. No retries.

use chronicle_core::{Item, RawItem};
use reqwest::StatusCode;
use std::path::PathBuf;
use tracing::{debug, error};

/// Where the item list comes from.
#[derive(Debug, Clone)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Source::Url(raw.to_string())
        } else {
            Source::File(PathBuf::from(raw))
        }
    }

    /// Short label for the header bar.
    pub fn label(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Url(url) => url.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("item list is empty")]
    Empty,
}

/// Fetch the raw item list. One attempt; any failure is reported as-is.
/// A payload that is not a non-empty JSON array is a failure.
pub async fn fetch(source: &Source) -> Result<Vec<RawItem>, LoadError> {
    let body = match source {
        Source::File(path) => tokio::fs::read_to_string(path).await?,
        Source::Url(url) => {
            let response = reqwest::Client::new()
                .get(url)
                .header(reqwest::header::CACHE_CONTROL, "no-cache")
                .header(reqwest::header::PRAGMA, "no-cache")
                .send()
                .await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status(status));
            }
            response.text().await?
        }
    };

    let items: Vec<RawItem> = serde_json::from_str(&body)?;
    if items.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(items)
}

/// Load and normalize the item list, substituting the fallback on any
/// failure. Returns the items plus whether the fallback was used.
pub async fn load(source: &Source) -> (Vec<Item>, bool) {
    match fetch(source).await {
        Ok(raw) => {
            debug!(count = raw.len(), "loaded timeline items");
            let items = raw
                .into_iter()
                .enumerate()
                .map(|(position, item)| Item::normalize(item, position))
                .collect();
            (items, false)
        }
        Err(err) => {
            error!("failed to load {}: {err}", source.label());
            (fallback_items(), true)
        }
    }
}

/// The single-item placeholder list shown when the data source cannot be
/// read. Its content explains the likely causes to whoever is looking.
pub fn fallback_items() -> Vec<Item> {
    let raw = RawItem {
        id: Some("placeholder".to_string()),
        num: Some(1),
        tag: Some("Demo".to_string()),
        title: Some("Could not load timeline data".to_string()),
        summary: Some("Built-in placeholder entry so the timeline is never empty.".to_string()),
        content: Some(
            "Likely causes:\n\n\
             1) The data file does not exist at the expected location.\n\
             2) The file name does not match the one passed on the command line.\n\
             3) A URL source is not being served or answered with an error status.\n\n\
             Pass the JSON file path or URL as the first argument."
                .to_string(),
        ),
        ..RawItem::default()
    };
    vec![Item::normalize(raw, 0)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn file_source(content: &str) -> (tempfile::TempDir, Source) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timeline.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, Source::File(path))
    }

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert!(matches!(
            Source::parse("https://example.com/timeline.json"),
            Source::Url(_)
        ));
        assert!(matches!(
            Source::parse("http://localhost:8000/t.json"),
            Source::Url(_)
        ));
        assert!(matches!(Source::parse("./timeline.json"), Source::File(_)));
        assert!(matches!(Source::parse("data/items.json"), Source::File(_)));
    }

    #[tokio::test]
    async fn fetch_reads_a_json_array_from_disk() {
        let (_dir, source) = file_source(r#"[{"id":"a","title":"A"},{"id":"b"}]"#);
        let items = fetch(&source).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id.as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn fetch_fails_on_missing_file() {
        let source = Source::File(PathBuf::from("/nonexistent/timeline.json"));
        assert!(matches!(fetch(&source).await, Err(LoadError::Io(_))));
    }

    #[tokio::test]
    async fn fetch_fails_on_malformed_json() {
        let (_dir, source) = file_source("not json at all");
        assert!(matches!(fetch(&source).await, Err(LoadError::Parse(_))));
    }

    #[tokio::test]
    async fn fetch_fails_when_payload_is_not_an_array() {
        let (_dir, source) = file_source(r#"{"id":"a"}"#);
        assert!(matches!(fetch(&source).await, Err(LoadError::Parse(_))));
    }

    #[tokio::test]
    async fn fetch_fails_on_empty_array() {
        let (_dir, source) = file_source("[]");
        assert!(matches!(fetch(&source).await, Err(LoadError::Empty)));
    }

    #[tokio::test]
    async fn load_substitutes_fallback_on_failure() {
        let source = Source::File(PathBuf::from("/nonexistent/timeline.json"));
        let (items, used_fallback) = load(&source).await;
        assert!(used_fallback);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id.as_deref(), Some("placeholder"));
    }

    #[tokio::test]
    async fn load_normalizes_positions() {
        let (_dir, source) = file_source(r#"[{}, {}, {"num": 40}]"#);
        let (items, used_fallback) = load(&source).await;
        assert!(!used_fallback);
        assert_eq!(items[0].num, 1);
        assert_eq!(items[1].num, 2);
        assert_eq!(items[2].num, 40);
    }

    #[test]
    fn fallback_is_a_single_renderable_item() {
        let items = fallback_items();
        assert_eq!(items.len(), 1);
        assert!(!items[0].title.is_empty());
        assert!(!items[0].content.is_empty());
        assert_eq!(items[0].image, None);
    }

    #[tokio::test]
    async fn fallback_view_has_one_node_with_nav_disabled() {
        let source = Source::File(PathBuf::from("/nonexistent/timeline.json"));
        let (items, _) = load(&source).await;
        let timeline = chronicle_core::Timeline::new(items);
        let view = chronicle_core::view::build(&timeline);
        assert_eq!(view.nodes.len(), 1);
        assert!(!view.prev_enabled);
        assert!(!view.next_enabled);
        assert_eq!(view.progress_pct, 100.0);
    }
}
