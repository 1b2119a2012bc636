//! Shared per-page form state.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Field values of one page: an arbitrary key-value record.
pub type PageValues = Map<String, Value>;

/// Store shared by all wizard pages.
///
/// Each page owns the slice under its own key (`page1`, `page2`, …) and may
/// only shallow-merge into it: existing keys not present in an update are
/// preserved, and no page can see or corrupt another page's slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormStore {
    data: BTreeMap<String, PageValues>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store key for a zero-based page index (`0` → `"page1"`).
    pub fn page_key(index: usize) -> String {
        format!("page{}", index + 1)
    }

    /// Shallow-merge `values` into the page's slice.
    pub fn update(&mut self, page_key: &str, values: PageValues) {
        let slice = self.data.entry(page_key.to_string()).or_default();
        for (key, value) in values {
            slice.insert(key, value);
        }
    }

    /// Read-only view of one slice, if the page has written anything.
    pub fn slice(&self, page_key: &str) -> Option<&PageValues> {
        self.data.get(page_key)
    }

    /// Clone of one slice; empty when the page has not been visited. This is
    /// what a page receives as its default values when re-entered.
    pub fn slice_or_empty(&self, page_key: &str) -> PageValues {
        self.data.get(page_key).cloned().unwrap_or_default()
    }

    /// Discard all accumulated state. Called only after a successful
    /// submission.
    pub fn reset(&mut self) {
        self.data.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
