use crate::config::{LatencyProfile, ServiceConfig};
use crate::dto::analytics::{ExportFormat, VideoQuery};
use crate::dto::common::ActionResponse;
use crate::error::{Result, SharedError};
use crate::mock_data::MockDataStore;
use crate::models::analytics::{
    AnalyticsSnapshot, DateRange, DemographicData, VideoDetail, ViewsPoint,
};
use crate::models::video::Video;
use crate::series::{self, SeriesShape};
use crate::services::latency::Latency;
use chrono::Utc;
use log::{debug, info};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

/// REST paths a real backend would serve these calls from
pub const OVERVIEW_PATH: &str = "/analytics/overview";
pub const VIDEOS_PATH: &str = "/analytics/videos";
pub const AUDIENCE_PATH: &str = "/analytics/audience";
pub const EXPORT_PATH: &str = "/analytics/export";

/// Channel analytics backed by the mock dataset
pub struct AnalyticsService {
    store: Arc<MockDataStore>,
    latency: Rc<dyn Latency>,
    config: ServiceConfig,
    /// Seeds sparkline generation so every fetch draws a fresh series
    fetch_count: Cell<u64>,
}

impl AnalyticsService {
    pub fn new(store: Arc<MockDataStore>, latency: Rc<dyn Latency>, config: ServiceConfig) -> Self {
        Self {
            store,
            latency,
            config,
            fetch_count: Cell::new(0),
        }
    }

    /// Service over the embedded dataset
    pub fn embedded(latency: Rc<dyn Latency>, config: ServiceConfig) -> Result<Self> {
        Ok(Self::new(MockDataStore::embedded()?, latency, config))
    }

    pub fn endpoint(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    async fn delay(&self, ms: u64) {
        self.latency.sleep(LatencyProfile::duration(ms)).await;
    }

    /// Headline metrics with freshly generated sparklines.
    ///
    /// The mock ignores `range` apart from logging it.
    pub async fn get_overview(&self, range: DateRange) -> Result<AnalyticsSnapshot> {
        debug!("Fetching overview for {} ({})", range, self.endpoint(OVERVIEW_PATH));
        self.delay(self.config.latency.overview_ms).await;

        let seed = self.fetch_count.get();
        self.fetch_count.set(seed + 1);

        let mut snapshot = self.store.analytics().clone();
        snapshot.sparklines = series::sparklines_for(&snapshot, seed);
        Ok(snapshot)
    }

    /// Sorted copy of the catalogue, truncated to `query.limit`.
    pub async fn get_videos(&self, query: VideoQuery) -> Result<Vec<Video>> {
        debug!("Fetching videos {:?} ({})", query, self.endpoint(VIDEOS_PATH));
        self.delay(self.config.latency.videos_ms).await;

        let mut videos = self.store.videos().to_vec();
        videos.sort_by(|a, b| query.order.apply(query.sort_by.compare(a, b)));
        if let Some(limit) = query.limit {
            videos.truncate(limit);
        }
        Ok(videos)
    }

    /// Drill-down for one video. Fails with "Video not found" on an unknown id.
    pub async fn get_video_analytics(&self, video_id: &str) -> Result<VideoDetail> {
        debug!("Fetching analytics for video {}", video_id);
        self.delay(self.config.latency.video_detail_ms).await;

        let video = self
            .store
            .find_video(video_id)
            .cloned()
            .ok_or_else(|| SharedError::not_found("Video"))?;

        let daily = (video.views / 90).max(1);
        let shape = SeriesShape::new(daily, daily / 40, 97, daily / 5 + 1);
        let end = Utc::now().date_naive();

        Ok(VideoDetail {
            daily_views: series::daily_views(shape, 14, end, 0),
            retention: series::retention_curve(&video),
            traffic_sources: series::traffic_sources(&video),
            video,
        })
    }

    pub async fn get_audience(&self) -> Result<DemographicData> {
        debug!("Fetching audience ({})", self.endpoint(AUDIENCE_PATH));
        self.delay(self.config.latency.audience_ms).await;
        Ok(self.store.analytics().demographic_data.clone())
    }

    /// One generated point per day of `range`, ending today.
    pub async fn get_views_over_time(&self, range: DateRange) -> Result<Vec<ViewsPoint>> {
        debug!("Fetching views over time for {}", range);
        self.delay(self.config.latency.overview_ms).await;

        let snapshot = self.store.analytics();
        let daily = (snapshot.total_views / 30).max(1);
        let shape = SeriesShape::new(daily, daily / 200, 7919, daily / 8 + 1);
        Ok(series::daily_views(
            shape,
            range.days(),
            Utc::now().date_naive(),
            u64::from(range.days()),
        ))
    }

    /// Pretends to export a report; always succeeds.
    pub async fn export_report(&self, format: impl Into<ExportFormat>) -> Result<ActionResponse> {
        let format = format.into();
        info!("Exporting report as {} ({})", format.upper(), self.endpoint(EXPORT_PATH));
        self.delay(self.config.latency.export_ms).await;
        Ok(ActionResponse::ok(format!(
            "Report exported as {}",
            format.upper()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::analytics::VideoSortField;
    use crate::dto::common::SortOrder;
    use crate::services::latency::NoLatency;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn service() -> AnalyticsService {
        AnalyticsService::embedded(Rc::new(NoLatency), ServiceConfig::instant()).unwrap()
    }

    #[tokio::test]
    async fn test_overview_regenerates_sparklines_each_fetch() {
        let service = service();
        let first = service.get_overview(DateRange::Last30Days).await.unwrap();
        let second = service.get_overview(DateRange::Last7Days).await.unwrap();

        assert_eq!(first.total_views, second.total_views);
        assert_eq!(first.sparklines.views.len(), series::SPARKLINE_POINTS);
        assert_ne!(first.sparklines, second.sparklines);
    }

    #[rstest]
    #[case(VideoSortField::Views)]
    #[case(VideoSortField::Likes)]
    #[case(VideoSortField::EngagementRate)]
    #[case(VideoSortField::AvgViewDuration)]
    #[case(VideoSortField::PublishedAt)]
    #[tokio::test]
    async fn test_videos_sorted_both_directions(#[case] field: VideoSortField) {
        let service = service();

        let desc = service
            .get_videos(VideoQuery::new(field, SortOrder::Desc))
            .await
            .unwrap();
        for pair in desc.windows(2) {
            assert!(field.compare(&pair[0], &pair[1]).is_ge());
        }

        let asc = service
            .get_videos(VideoQuery::new(field, SortOrder::Asc))
            .await
            .unwrap();
        for pair in asc.windows(2) {
            assert!(field.compare(&pair[0], &pair[1]).is_le());
        }
    }

    #[tokio::test]
    async fn test_videos_limit() {
        let videos = service()
            .get_videos(VideoQuery::default().with_limit(3))
            .await
            .unwrap();
        assert_eq!(videos.len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_video_is_not_found() {
        let err = service()
            .get_video_analytics("nonexistent-id")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Video not found");
    }

    #[tokio::test]
    async fn test_video_detail() {
        let detail = service().get_video_analytics("vid-001").await.unwrap();
        assert_eq!(detail.video.id, "vid-001");
        assert_eq!(detail.daily_views.len(), 14);
        assert!(!detail.retention.is_empty());
    }

    #[tokio::test]
    async fn test_views_over_time_has_one_point_per_day() {
        let service = service();
        for range in DateRange::ALL {
            let points = service.get_views_over_time(range).await.unwrap();
            assert_eq!(points.len() as u32, range.days());
        }
    }

    #[tokio::test]
    async fn test_export_report_uppercases_format() {
        let response = service().export_report("csv").await.unwrap();
        assert_eq!(
            response,
            ActionResponse {
                success: true,
                message: "Report exported as CSV".to_string(),
            }
        );
    }
}
