use crate::dto::common::SortOrder;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::video::Video;

/// Video fields the catalogue can be sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VideoSortField {
    #[default]
    Views,
    Likes,
    EngagementRate,
    AvgViewDuration,
    /// Plain string comparison of the ISO date, not locale-aware
    PublishedAt,
}

impl VideoSortField {
    pub const ALL: [VideoSortField; 5] = [
        VideoSortField::Views,
        VideoSortField::Likes,
        VideoSortField::EngagementRate,
        VideoSortField::AvgViewDuration,
        VideoSortField::PublishedAt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VideoSortField::Views => "Views",
            VideoSortField::Likes => "Likes",
            VideoSortField::EngagementRate => "Engagement",
            VideoSortField::AvgViewDuration => "Avg. duration",
            VideoSortField::PublishedAt => "Published",
        }
    }

    /// Ascending comparison of two videos on this field.
    pub fn compare(&self, a: &Video, b: &Video) -> Ordering {
        match self {
            VideoSortField::Views => a.views.cmp(&b.views),
            VideoSortField::Likes => a.likes.cmp(&b.likes),
            VideoSortField::EngagementRate => a.engagement_rate.total_cmp(&b.engagement_rate),
            VideoSortField::AvgViewDuration => a.avg_view_duration.cmp(&b.avg_view_duration),
            VideoSortField::PublishedAt => a.published_at.cmp(&b.published_at),
        }
    }
}

/// Parameters for `AnalyticsService::get_videos`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoQuery {
    pub sort_by: VideoSortField,
    pub order: SortOrder,
    /// Keep at most this many videos; `None` keeps all
    pub limit: Option<usize>,
}

impl VideoQuery {
    pub fn new(sort_by: VideoSortField, order: SortOrder) -> Self {
        Self {
            sort_by,
            order,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Report formats accepted by `export_report`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFormat(String);

impl ExportFormat {
    pub fn new(format: impl Into<String>) -> Self {
        Self(format.into())
    }

    pub fn upper(&self) -> String {
        self.0.to_uppercase()
    }
}

impl From<&str> for ExportFormat {
    fn from(format: &str) -> Self {
        Self::new(format)
    }
}
