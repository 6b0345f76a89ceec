//! Deterministic generators for chart data.
//!
//! Values follow `base + index*step + ((index + seed)*k) % m`, which gives a
//! rising series with a little jitter. The same shape and seed always produce
//! the same series.

use crate::models::analytics::{
    AnalyticsSnapshot, RetentionPoint, Sparklines, TrafficSource, ViewsPoint,
};
use crate::models::video::Video;
use chrono::{Duration, NaiveDate};

/// Number of points in each headline sparkline
pub const SPARKLINE_POINTS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesShape {
    pub base: u64,
    pub step: u64,
    pub k: u64,
    /// Jitter modulus; must be non-zero
    pub m: u64,
}

impl SeriesShape {
    pub fn new(base: u64, step: u64, k: u64, m: u64) -> Self {
        Self {
            base,
            step,
            k,
            m: m.max(1),
        }
    }

    pub fn value_at(&self, index: u64, seed: u64) -> u64 {
        self.base + index * self.step + ((index + seed) * self.k) % self.m
    }

    pub fn generate(&self, len: usize, seed: u64) -> Vec<u64> {
        (0..len as u64).map(|i| self.value_at(i, seed)).collect()
    }
}

/// Sparklines scaled off the snapshot's headline numbers.
pub fn sparklines_for(snapshot: &AnalyticsSnapshot, seed: u64) -> Sparklines {
    let daily_views = snapshot.total_views / 30;
    let daily_subs = snapshot.total_subscribers / 365;
    let engagement_bp = (snapshot.engagement_rate * 100.0).round() as u64;
    let daily_watch = snapshot.watch_time_hours / 30;

    Sparklines {
        views: SeriesShape::new(daily_views, daily_views / 50, 7919, daily_views / 10 + 1)
            .generate(SPARKLINE_POINTS, seed),
        subscribers: SeriesShape::new(daily_subs, daily_subs / 40, 104_729, daily_subs / 8 + 1)
            .generate(SPARKLINE_POINTS, seed),
        engagement: SeriesShape::new(engagement_bp, 3, 13, engagement_bp / 10 + 1)
            .generate(SPARKLINE_POINTS, seed),
        watch_time: SeriesShape::new(daily_watch, daily_watch / 60, 6271, daily_watch / 12 + 1)
            .generate(SPARKLINE_POINTS, seed),
    }
}

/// One point per day, ending at `end` inclusive.
pub fn daily_views(shape: SeriesShape, days: u32, end: NaiveDate, seed: u64) -> Vec<ViewsPoint> {
    let start = end - Duration::days(i64::from(days.saturating_sub(1)));
    (0..u64::from(days))
        .map(|i| ViewsPoint {
            date: (start + Duration::days(i as i64))
                .format("%Y-%m-%d")
                .to_string(),
            views: shape.value_at(i, seed),
        })
        .collect()
}

/// Audience retention sampled at every tenth of the average view duration.
pub fn retention_curve(video: &Video) -> Vec<RetentionPoint> {
    let interval = (video.avg_view_duration / 10).max(1);
    let floor = 20.0 + video.engagement_rate * 2.0;
    (0..=10u32)
        .map(|i| {
            let drop = f64::from(i) * 6.5 + f64::from((i * 7) % 5);
            RetentionPoint {
                second: i * interval,
                percent: (100.0 - drop).max(floor).min(100.0),
            }
        })
        .collect()
}

/// Fixed traffic split, nudged by how popular the video is.
pub fn traffic_sources(video: &Video) -> Vec<TrafficSource> {
    let browse_bonus = ((video.views / 100_000) % 10) as f64;
    let search = 30.0 - browse_bonus / 2.0;
    let browse = 25.0 + browse_bonus;
    let suggested = 28.0 - browse_bonus / 2.0;
    let external = 100.0 - search - browse - suggested;
    vec![
        TrafficSource {
            source: "YouTube search".to_string(),
            percentage: search,
        },
        TrafficSource {
            source: "Browse features".to_string(),
            percentage: browse,
        },
        TrafficSource {
            source: "Suggested videos".to_string(),
            percentage: suggested,
        },
        TrafficSource {
            source: "External".to_string(),
            percentage: external,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_formula() {
        let shape = SeriesShape::new(100, 10, 7, 5);
        assert_eq!(shape.generate(4, 0), vec![100, 112, 124, 131]);
    }

    #[test]
    fn test_same_seed_same_series() {
        let shape = SeriesShape::new(1000, 25, 31, 17);
        assert_eq!(shape.generate(12, 3), shape.generate(12, 3));
        assert_ne!(shape.generate(12, 3), shape.generate(12, 4));
    }

    #[test]
    fn test_zero_modulus_is_clamped() {
        let shape = SeriesShape::new(1, 1, 1, 0);
        assert_eq!(shape.m, 1);
        assert_eq!(shape.generate(3, 0), vec![1, 2, 3]);
    }

    #[test]
    fn test_daily_views_covers_range_ending_on_end_date() {
        let points = daily_views(SeriesShape::new(10, 1, 3, 4), 7, date(2024, 3, 10), 0);
        assert_eq!(points.len(), 7);
        assert_eq!(points.first().unwrap().date, "2024-03-04");
        assert_eq!(points.last().unwrap().date, "2024-03-10");
    }

    #[test]
    fn test_retention_is_non_increasing_and_bounded() {
        let video = Video {
            id: "v".to_string(),
            title: "t".to_string(),
            thumbnail: String::new(),
            views: 500_000,
            likes: 0,
            engagement_rate: 5.0,
            published_at: "2024-01-01".to_string(),
            avg_view_duration: 300,
        };
        let curve = retention_curve(&video);
        assert_eq!(curve.len(), 11);
        assert_eq!(curve[0].percent, 100.0);
        for pair in curve.windows(2) {
            assert!(pair[1].percent <= pair[0].percent);
            assert!(pair[1].percent >= 30.0);
        }

        let total: f64 = traffic_sources(&video).iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }
}
