use crate::models::trend::Trend;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Category value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Sort keys for the trends list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendSortKey {
    /// Highest opportunity score first
    #[default]
    Opportunity,
    /// Highest search volume first
    SearchVolume,
    /// High, then Medium, then Low
    Strength,
    /// Alphabetical by topic
    Topic,
}

impl TrendSortKey {
    pub const ALL: [TrendSortKey; 4] = [
        TrendSortKey::Opportunity,
        TrendSortKey::SearchVolume,
        TrendSortKey::Strength,
        TrendSortKey::Topic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TrendSortKey::Opportunity => "Opportunity",
            TrendSortKey::SearchVolume => "Search volume",
            TrendSortKey::Strength => "Strength",
            TrendSortKey::Topic => "Topic",
        }
    }

    pub fn compare(&self, a: &Trend, b: &Trend) -> Ordering {
        match self {
            TrendSortKey::Opportunity => b.opportunity_score.cmp(&a.opportunity_score),
            TrendSortKey::SearchVolume => b.search_volume.cmp(&a.search_volume),
            TrendSortKey::Strength => b
                .strength
                .cmp(&a.strength)
                .then_with(|| b.opportunity_score.cmp(&a.opportunity_score)),
            TrendSortKey::Topic => a.topic.cmp(&b.topic),
        }
    }
}

/// Parameters for `TrendsService::get_trends`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendFilter {
    /// Exact category name, or [`ALL_CATEGORIES`]
    pub category: String,
    pub search: String,
    pub sort_by: TrendSortKey,
}

impl Default for TrendFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            sort_by: TrendSortKey::default(),
        }
    }
}

impl TrendFilter {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort_by: TrendSortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Empty category is treated like "all".
    pub fn category_filter(&self) -> Option<&str> {
        let category = self.category.trim();
        if category.is_empty() || category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            None
        } else {
            Some(category)
        }
    }

    /// Trimmed, lowercased search needle, `None` when blank.
    pub fn search_needle(&self) -> Option<String> {
        let needle = self.search.trim();
        if needle.is_empty() {
            None
        } else {
            Some(needle.to_lowercase())
        }
    }
}
