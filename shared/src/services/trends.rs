use crate::config::{LatencyProfile, ServiceConfig};
use crate::dto::common::ActionResponse;
use crate::dto::trends::{TrendFilter, ALL_CATEGORIES};
use crate::error::{Result, SharedError};
use crate::mock_data::MockDataStore;
use crate::models::insight::Insight;
use crate::models::trend::Trend;
use crate::services::latency::Latency;
use log::debug;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::sync::Arc;

pub const TRENDS_PATH: &str = "/trends";
pub const INSIGHTS_PATH: &str = "/insights";

/// Trend discovery and insight recommendations backed by the mock dataset
pub struct TrendsService {
    store: Arc<MockDataStore>,
    latency: Rc<dyn Latency>,
    config: ServiceConfig,
}

impl TrendsService {
    pub fn new(store: Arc<MockDataStore>, latency: Rc<dyn Latency>, config: ServiceConfig) -> Self {
        Self {
            store,
            latency,
            config,
        }
    }

    pub fn embedded(latency: Rc<dyn Latency>, config: ServiceConfig) -> Result<Self> {
        Ok(Self::new(MockDataStore::embedded()?, latency, config))
    }

    async fn delay(&self, ms: u64) {
        self.latency.sleep(LatencyProfile::duration(ms)).await;
    }

    /// Filtered, searched and sorted copy of the trend list.
    pub async fn get_trends(&self, filter: TrendFilter) -> Result<Vec<Trend>> {
        debug!("Fetching trends {:?} ({})", filter, self.config.api_url(TRENDS_PATH));
        self.delay(self.config.latency.trends_ms).await;

        let category = filter.category_filter();
        let needle = filter.search_needle();

        let mut trends: Vec<Trend> = self
            .store
            .trends()
            .iter()
            .filter(|trend| category.map_or(true, |c| trend.category == c))
            .filter(|trend| {
                needle
                    .as_deref()
                    .map_or(true, |needle| trend.matches_search(needle))
            })
            .cloned()
            .collect();
        trends.sort_by(|a, b| filter.sort_by.compare(a, b));
        Ok(trends)
    }

    pub async fn get_trend(&self, id: &str) -> Result<Trend> {
        self.delay(self.config.latency.lookup_ms).await;
        self.store
            .find_trend(id)
            .cloned()
            .ok_or_else(|| SharedError::not_found("Trend"))
    }

    /// Distinct categories in alphabetical order, preceded by "all".
    pub async fn get_categories(&self) -> Result<Vec<String>> {
        self.delay(self.config.latency.lookup_ms).await;
        let categories: BTreeSet<&str> = self
            .store
            .trends()
            .iter()
            .map(|trend| trend.category.as_str())
            .collect();
        Ok(std::iter::once(ALL_CATEGORIES)
            .chain(categories)
            .map(str::to_string)
            .collect())
    }

    /// Marks a trend as saved. The mock keeps no record of it.
    pub async fn bookmark_trend(&self, id: &str) -> Result<ActionResponse> {
        debug!("Bookmarking trend {}", id);
        self.delay(self.config.latency.action_ms).await;
        Ok(ActionResponse::ok("Trend bookmarked"))
    }

    /// Insights, optionally narrowed to one category.
    pub async fn get_insights(&self, category: Option<&str>) -> Result<Vec<Insight>> {
        debug!(
            "Fetching insights for {:?} ({})",
            category,
            self.config.api_url(INSIGHTS_PATH)
        );
        self.delay(self.config.latency.insights_ms).await;

        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES));
        Ok(self
            .store
            .insights()
            .iter()
            .filter(|insight| category.map_or(true, |c| insight.category == c))
            .cloned()
            .collect())
    }

    pub async fn get_insight(&self, id: &str) -> Result<Insight> {
        self.delay(self.config.latency.lookup_ms).await;
        self.store
            .find_insight(id)
            .cloned()
            .ok_or_else(|| SharedError::not_found("Insight"))
    }

    /// Acknowledges an applied insight without changing the dataset.
    pub async fn apply_insight(&self, id: &str) -> Result<ActionResponse> {
        debug!("Applying insight {}", id);
        self.delay(self.config.latency.action_ms).await;
        Ok(ActionResponse::ok("Insight applied successfully"))
    }

    /// Acknowledges a dismissed insight without changing the dataset.
    pub async fn dismiss_insight(&self, id: &str) -> Result<ActionResponse> {
        debug!("Dismissing insight {}", id);
        self.delay(self.config.latency.action_ms).await;
        Ok(ActionResponse::ok("Insight dismissed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::trends::TrendSortKey;
    use crate::services::latency::NoLatency;
    use pretty_assertions::assert_eq;

    fn service() -> TrendsService {
        TrendsService::embedded(Rc::new(NoLatency), ServiceConfig::instant()).unwrap()
    }

    #[tokio::test]
    async fn test_category_filter() {
        let service = service();
        let gaming = service
            .get_trends(TrendFilter::category("Gaming"))
            .await
            .unwrap();
        assert!(!gaming.is_empty());
        assert!(gaming.iter().all(|t| t.category == "Gaming"));

        let all = service.get_trends(TrendFilter::default()).await.unwrap();
        assert_eq!(all.len(), MockDataStore::embedded().unwrap().trends().len());
    }

    #[tokio::test]
    async fn test_search_spans_hashtags() {
        let trends = service()
            .get_trends(TrendFilter::default().with_search("#RetroGaming"))
            .await
            .unwrap();
        let ids: Vec<&str> = trends.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["trend-002"]);
    }

    #[tokio::test]
    async fn test_default_sort_is_by_opportunity() {
        let trends = service().get_trends(TrendFilter::default()).await.unwrap();
        for pair in trends.windows(2) {
            assert!(pair[0].opportunity_score >= pair[1].opportunity_score);
        }
    }

    #[tokio::test]
    async fn test_topic_sort_is_alphabetical() {
        let trends = service()
            .get_trends(TrendFilter::default().with_sort(TrendSortKey::Topic))
            .await
            .unwrap();
        for pair in trends.windows(2) {
            assert!(pair[0].topic <= pair[1].topic);
        }
    }

    #[tokio::test]
    async fn test_lookups_share_not_found_contract() {
        let service = service();
        assert_eq!(service.get_trend("trend-003").await.unwrap().id, "trend-003");

        let trend = service.get_trend("missing").await.unwrap_err();
        assert_eq!(trend.to_string(), "Trend not found");

        let insight = service.get_insight("missing").await.unwrap_err();
        assert_eq!(insight.to_string(), "Insight not found");
    }

    #[tokio::test]
    async fn test_categories_start_with_all() {
        let categories = service().get_categories().await.unwrap();
        assert_eq!(
            categories,
            vec!["all", "Education", "Gaming", "Lifestyle", "Technology"]
        );
    }

    #[tokio::test]
    async fn test_insight_actions_do_not_mutate_dataset() {
        let service = service();
        let before = service.get_insights(None).await.unwrap();

        assert!(service.apply_insight("insight-001").await.unwrap().success);
        assert!(service.dismiss_insight("insight-002").await.unwrap().success);
        assert!(service.bookmark_trend("trend-001").await.unwrap().success);

        assert_eq!(service.get_insights(None).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_insight_category_filter() {
        let engagement = service().get_insights(Some("Engagement")).await.unwrap();
        assert_eq!(engagement.len(), 2);
        assert!(engagement.iter().all(|i| i.category == "Engagement"));
    }
}
