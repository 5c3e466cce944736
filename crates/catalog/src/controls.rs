//! The catalog's UI controls, as events and value snapshots.

use serde::{Deserialize, Serialize};

/// A discrete change on one of the three controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlEvent {
    SearchChanged,
    CategoryChanged,
    SortChanged,
}

/// Current control values at the moment of an event. `None` means the
/// control is not present on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlValues {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

impl ControlValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}
