use serde::{Deserialize, Serialize};
use validator::Validate;

/// A published video in the creator's catalogue
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[validate(length(min = 1, message = "Video id is required"))]
    pub id: String,

    #[validate(length(min = 1, max = 200, message = "Video title is required"))]
    pub title: String,

    pub thumbnail: String,

    pub views: u64,

    pub likes: u64,

    #[validate(range(min = 0.0, max = 100.0, message = "Engagement rate must be a percentage"))]
    pub engagement_rate: f64,

    /// ISO date, `YYYY-MM-DD`
    pub published_at: String,

    /// Average view duration in seconds
    pub avg_view_duration: u32,
}

impl Video {
    /// `avg_view_duration` as `m:ss`
    pub fn formatted_duration(&self) -> String {
        format!(
            "{}:{:02}",
            self.avg_view_duration / 60,
            self.avg_view_duration % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_duration() {
        let video = Video {
            id: "v1".to_string(),
            title: "Test".to_string(),
            thumbnail: String::new(),
            views: 0,
            likes: 0,
            engagement_rate: 0.0,
            published_at: "2024-01-01".to_string(),
            avg_view_duration: 245,
        };
        assert_eq!(video.formatted_duration(), "4:05");
    }
}
