use crate::search_url::extract_term;

/// Number of prior searches surfaced as recent searches.
pub const RECENT_SEARCH_LIMIT: usize = 5;

/// Every request target generated so far, oldest first. The last entry is the
/// current target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestHistory {
    urls: Vec<String>,
}

impl RequestHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `url`, dropping any earlier identical entry first so a repeated
    /// search moves to the end instead of appearing twice.
    pub fn push(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.urls.retain(|existing| *existing != url);
        self.urls.push(url);
    }

    pub fn current(&self) -> Option<&str> {
        self.urls.last().map(String::as_str)
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn recent_terms(&self) -> Vec<String> {
        derive_recent(&self.urls)
    }
}

/// Search terms of the (up to five) targets immediately preceding the current
/// one, in history order. Entries that do not parse as search urls are skipped.
pub fn derive_recent(urls: &[String]) -> Vec<String> {
    let end = urls.len().saturating_sub(1);
    let start = end.saturating_sub(RECENT_SEARCH_LIMIT);
    urls[start..end]
        .iter()
        .filter_map(|url| extract_term(url).ok())
        .collect()
}
