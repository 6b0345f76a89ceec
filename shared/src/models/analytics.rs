use crate::models::video::Video;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Date range hint passed to overview fetches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRange {
    #[serde(rename = "7d")]
    Last7Days,
    #[default]
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[serde(rename = "1y")]
    LastYear,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [
        DateRange::Last7Days,
        DateRange::Last30Days,
        DateRange::Last90Days,
        DateRange::LastYear,
    ];

    pub fn days(&self) -> u32 {
        match self {
            DateRange::Last7Days => 7,
            DateRange::Last30Days => 30,
            DateRange::Last90Days => 90,
            DateRange::LastYear => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::Last7Days => "7d",
            DateRange::Last30Days => "30d",
            DateRange::Last90Days => "90d",
            DateRange::LastYear => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::Last7Days => "Last 7 days",
            DateRange::Last30Days => "Last 30 days",
            DateRange::Last90Days => "Last 90 days",
            DateRange::LastYear => "Last year",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateRange::ALL
            .into_iter()
            .find(|range| range.as_str() == s)
            .ok_or_else(|| format!("Unknown date range: {}", s))
    }
}

/// One day of view counts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewsPoint {
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
    pub views: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EngagementBreakdown {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub saves: u64,
}

impl EngagementBreakdown {
    pub fn total(&self) -> u64 {
        self.likes + self.comments + self.shares + self.saves
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct AgeGroup {
    pub range: String,
    #[validate(range(min = 0.0, max = 100.0))]
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct GenderShare {
    pub label: String,
    #[validate(range(min = 0.0, max = 100.0))]
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct CountryShare {
    pub country: String,
    pub views: u64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct DeviceShare {
    pub device: String,
    #[validate(range(min = 0.0, max = 100.0))]
    pub percentage: f64,
}

/// Audience breakdown shown on the dashboard and the audience page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DemographicData {
    pub age_groups: Vec<AgeGroup>,
    pub gender: Vec<GenderShare>,
    pub top_countries: Vec<CountryShare>,
    pub devices: Vec<DeviceShare>,
}

/// Small inline series drawn next to each headline metric. Regenerated on
/// every fetch and never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sparklines {
    pub views: Vec<u64>,
    pub subscribers: Vec<u64>,
    pub engagement: Vec<u64>,
    pub watch_time: Vec<u64>,
}

/// Headline channel metrics for the overview page
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_views: u64,
    pub total_subscribers: u64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub engagement_rate: f64,
    pub watch_time_hours: u64,
    pub views_change: f64,
    pub subscribers_change: f64,
    pub engagement_change: f64,
    pub watch_time_change: f64,
    pub views_over_time: Vec<ViewsPoint>,
    pub engagement_breakdown: EngagementBreakdown,
    pub demographic_data: DemographicData,
    #[serde(default)]
    pub sparklines: Sparklines,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetentionPoint {
    pub second: u32,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficSource {
    pub source: String,
    pub percentage: f64,
}

/// Per-video drill-down
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetail {
    pub video: Video,
    pub daily_views: Vec<ViewsPoint>,
    pub retention: Vec<RetentionPoint>,
    pub traffic_sources: Vec<TrafficSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_parsing() {
        assert_eq!("7d".parse::<DateRange>().unwrap(), DateRange::Last7Days);
        assert_eq!("1y".parse::<DateRange>().unwrap(), DateRange::LastYear);
        assert!("2w".parse::<DateRange>().is_err());
    }

    #[test]
    fn test_date_range_serializes_as_short_code() {
        let json = serde_json::to_string(&DateRange::Last90Days).unwrap();
        assert_eq!(json, "\"90d\"");
        assert_eq!(DateRange::default().days(), 30);
    }

    #[test]
    fn test_engagement_total() {
        let breakdown = EngagementBreakdown {
            likes: 10,
            comments: 5,
            shares: 3,
            saves: 2,
        };
        assert_eq!(breakdown.total(), 20);
    }
}
