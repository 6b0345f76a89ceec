use crate::models::trend::Level;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

/// A recommendation generated for the creator
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Insight {
    #[validate(length(min = 1, message = "Insight id is required"))]
    pub id: String,

    #[validate(length(min = 1, message = "Insight title is required"))]
    pub title: String,

    pub message: String,

    pub category: String,

    pub priority: Level,

    pub icon: String,

    /// Human-readable expected effect, e.g. "+15% watch time"
    pub impact: String,

    pub actionable: bool,

    pub actions: Vec<String>,
}

/// What the creator has done with an insight during this session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightStatus {
    Open,
    Applied,
    Dismissed,
}

/// Applied/dismissed bookkeeping for the insights view.
///
/// Lives only in memory; a reload starts from a clean slate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightTriage {
    applied: HashSet<String>,
    dismissed: HashSet<String>,
}

impl InsightTriage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, id: &str) {
        self.dismissed.remove(id);
        self.applied.insert(id.to_string());
    }

    pub fn dismiss(&mut self, id: &str) {
        self.applied.remove(id);
        self.dismissed.insert(id.to_string());
    }

    pub fn status(&self, id: &str) -> InsightStatus {
        if self.applied.contains(id) {
            InsightStatus::Applied
        } else if self.dismissed.contains(id) {
            InsightStatus::Dismissed
        } else {
            InsightStatus::Open
        }
    }

    /// Insights that have not been dismissed, highest priority first.
    pub fn visible<'a>(&self, insights: &'a [Insight]) -> Vec<&'a Insight> {
        let mut visible: Vec<&Insight> = insights
            .iter()
            .filter(|insight| !self.dismissed.contains(&insight.id))
            .collect();
        visible.sort_by(|a, b| b.priority.cmp(&a.priority));
        visible
    }

    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }
}
