//! Text sources.
//!
//! A [`TextSource`] turns a URL (or any caller-chosen identifier) into
//! plain text. Fetching, HTML stripping, timeouts, and HTTP error
//! mapping all belong to the implementation; the analysis pipeline only
//! consumes the decoded text. [`StaticSource`] serves fixed text for
//! tests and offline corpora.

use std::time::Duration;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors a text source may signal.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unknown source `{0}`")]
    NotFound(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// A capability that resolves a URL to plain text content.
pub trait TextSource {
    /// Fetch the plain-text content behind `url`.
    fn fetch_text(&self, url: &str) -> Result<String, SourceError>;
}

/// An in-memory source mapping URLs to fixed text.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pages: FxHashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page; replaces any previous text for the same URL.
    pub fn insert(&mut self, url: impl Into<String>, text: impl Into<String>) {
        self.pages.insert(url.into(), text.into());
    }

    /// Builder-style [`StaticSource::insert`].
    pub fn with_page(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(url, text);
        self
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl TextSource for StaticSource {
    fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_serves_registered_pages() {
        let source = StaticSource::new()
            .with_page("news/1", "第一篇")
            .with_page("news/2", "第二篇");

        assert_eq!(source.fetch_text("news/1").unwrap(), "第一篇");
        assert_eq!(source.fetch_text("news/2").unwrap(), "第二篇");
    }

    #[test]
    fn test_static_source_unknown_url() {
        let source = StaticSource::new();
        let err = source.fetch_text("news/404").unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
        assert!(err.to_string().contains("news/404"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut source = StaticSource::new();
        source.insert("page", "old");
        source.insert("page", "new");
        assert_eq!(source.fetch_text("page").unwrap(), "new");
        assert_eq!(source.len(), 1);
    }
}
