//! Embedded mock dataset standing in for a backend.
//!
//! The JSON files under `data/` are compiled into the binary, parsed once and
//! validated record by record, so a shape change fails at load time instead
//! of rendering empty widgets.

use crate::error::{Result, SharedError};
use crate::models::analytics::AnalyticsSnapshot;
use crate::models::insight::Insight;
use crate::models::trend::Trend;
use crate::models::user::User;
use crate::models::video::Video;
use log::{debug, error};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::sync::Arc;
use validator::Validate;

const USER_JSON: &str = include_str!("../data/user.json");
const ANALYTICS_JSON: &str = include_str!("../data/analytics.json");
const VIDEOS_JSON: &str = include_str!("../data/videos.json");
const TRENDS_JSON: &str = include_str!("../data/trends.json");
const INSIGHTS_JSON: &str = include_str!("../data/insights.json");

static EMBEDDED: Lazy<std::result::Result<Arc<MockDataStore>, String>> = Lazy::new(|| {
    MockDataStore::from_json(
        USER_JSON,
        ANALYTICS_JSON,
        VIDEOS_JSON,
        TRENDS_JSON,
        INSIGHTS_JSON,
    )
    .map(Arc::new)
    .map_err(|e| {
        error!("Embedded mock data failed to load: {}", e);
        e.to_string()
    })
});

/// Static records loaded once into memory
#[derive(Debug, Clone, PartialEq)]
pub struct MockDataStore {
    user: User,
    analytics: AnalyticsSnapshot,
    videos: Vec<Video>,
    trends: Vec<Trend>,
    insights: Vec<Insight>,
}

impl MockDataStore {
    /// The dataset compiled into the binary.
    pub fn embedded() -> Result<Arc<MockDataStore>> {
        match &*EMBEDDED {
            Ok(store) => Ok(Arc::clone(store)),
            Err(e) => Err(SharedError::Validation(e.clone())),
        }
    }

    /// Parses and validates a dataset.
    pub fn from_json(
        user: &str,
        analytics: &str,
        videos: &str,
        trends: &str,
        insights: &str,
    ) -> Result<Self> {
        let user: User = parse("user", user)?;
        let analytics: AnalyticsSnapshot = parse("analytics", analytics)?;
        let videos: Vec<Video> = parse("videos", videos)?;
        let trends: Vec<Trend> = parse("trends", trends)?;
        let insights: Vec<Insight> = parse("insights", insights)?;

        user.validate_fields()?;
        check("analytics", &analytics)?;
        for segment in &analytics.demographic_data.age_groups {
            check("analytics.ageGroups", segment)?;
        }
        for segment in &analytics.demographic_data.gender {
            check("analytics.gender", segment)?;
        }
        for segment in &analytics.demographic_data.top_countries {
            check("analytics.topCountries", segment)?;
        }
        for segment in &analytics.demographic_data.devices {
            check("analytics.devices", segment)?;
        }
        check_all("videos", &videos, |v| v.id.as_str())?;
        check_all("trends", &trends, |t| t.id.as_str())?;
        check_all("insights", &insights, |i| i.id.as_str())?;

        debug!(
            "Mock data loaded: {} videos, {} trends, {} insights",
            videos.len(),
            trends.len(),
            insights.len()
        );

        Ok(Self {
            user,
            analytics,
            videos,
            trends,
            insights,
        })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn analytics(&self) -> &AnalyticsSnapshot {
        &self.analytics
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn trends(&self) -> &[Trend] {
        &self.trends
    }

    pub fn insights(&self) -> &[Insight] {
        &self.insights
    }

    pub fn find_video(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|video| video.id == id)
    }

    pub fn find_trend(&self, id: &str) -> Option<&Trend> {
        self.trends.iter().find(|trend| trend.id == id)
    }

    pub fn find_insight(&self, id: &str) -> Option<&Insight> {
        self.insights.iter().find(|insight| insight.id == id)
    }
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw)
        .map_err(|e| SharedError::Validation(format!("{} has an unexpected shape: {}", name, e)))
}

fn check<T: Validate>(name: &str, record: &T) -> Result<()> {
    record
        .validate()
        .map_err(|e| SharedError::Validation(format!("{}: {}", name, e)))
}

/// Validates every record and rejects duplicate ids.
fn check_all<T, F>(name: &str, records: &[T], id_of: F) -> Result<()>
where
    T: Validate,
    F: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    for record in records {
        let id = id_of(record);
        check(&format!("{}[{}]", name, id), record)?;
        if !seen.insert(id) {
            return Err(SharedError::Validation(format!(
                "{} contains duplicate id {}",
                name, id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_dataset_loads() {
        let store = MockDataStore::embedded().unwrap();
        assert!(!store.videos().is_empty());
        assert!(!store.trends().is_empty());
        assert!(!store.insights().is_empty());
        assert_eq!(store.user().id, "creator-001");
    }

    #[test]
    fn test_lookup_by_id() {
        let store = MockDataStore::embedded().unwrap();
        assert!(store.find_video("vid-001").is_some());
        assert!(store.find_video("nonexistent-id").is_none());
        assert!(store.find_trend("trend-001").is_some());
        assert!(store.find_insight("insight-001").is_some());
    }

    #[test]
    fn test_shape_drift_fails_fast() {
        let broken_videos = r#"[{"id": "v1", "title": "Missing fields"}]"#;
        let err = MockDataStore::from_json(
            USER_JSON,
            ANALYTICS_JSON,
            broken_videos,
            TRENDS_JSON,
            INSIGHTS_JSON,
        )
        .unwrap_err();

        assert!(matches!(err, SharedError::Validation(_)));
        assert!(err.to_string().contains("videos has an unexpected shape"));
    }

    #[test]
    fn test_out_of_range_record_is_rejected() {
        let trends = TRENDS_JSON.replacen("\"opportunityScore\": 92", "\"opportunityScore\": 140", 1);
        let result = MockDataStore::from_json(
            USER_JSON,
            ANALYTICS_JSON,
            VIDEOS_JSON,
            &trends,
            INSIGHTS_JSON,
        );
        assert!(matches!(result, Err(SharedError::Validation(_))));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let videos = VIDEOS_JSON.replacen("\"vid-002\"", "\"vid-001\"", 1);
        let err = MockDataStore::from_json(
            USER_JSON,
            ANALYTICS_JSON,
            &videos,
            TRENDS_JSON,
            INSIGHTS_JSON,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate id vid-001"));
    }
}
