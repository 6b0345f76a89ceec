use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Qualitative strength of a trend (also used as insight priority)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A topic gaining search interest in the creator's niche
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    #[validate(length(min = 1, message = "Trend id is required"))]
    pub id: String,

    #[validate(length(min = 1, message = "Trend topic is required"))]
    pub topic: String,

    #[validate(length(min = 1, message = "Trend category is required"))]
    pub category: String,

    pub strength: Level,

    pub search_volume: u64,

    #[validate(range(min = 0, max = 100, message = "Opportunity score must be between 0 and 100"))]
    pub opportunity_score: u8,

    pub covered: bool,

    pub hashtags: Vec<String>,

    pub growth_data: Vec<u64>,

    pub description: String,

    pub related_videos: Vec<String>,
}

impl Trend {
    /// Case-insensitive match against topic, description and hashtags.
    /// `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.topic.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .hashtags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Percent change between the first and last growth samples.
    pub fn growth_percent(&self) -> f64 {
        match (self.growth_data.first(), self.growth_data.last()) {
            (Some(&first), Some(&last)) if first > 0 => {
                (last as f64 - first as f64) / first as f64 * 100.0
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend() -> Trend {
        Trend {
            id: "t1".to_string(),
            topic: "Speedrun Strategies".to_string(),
            category: "Gaming".to_string(),
            strength: Level::High,
            search_volume: 1000,
            opportunity_score: 80,
            covered: false,
            hashtags: vec!["#Speedrun".to_string()],
            growth_data: vec![100, 150, 200],
            description: "Routing guides".to_string(),
            related_videos: vec![],
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let trend = trend();
        assert!(trend.matches_search("speedrun"));
        assert!(trend.matches_search("routing"));
        assert!(!trend.matches_search("cooking"));
    }

    #[test]
    fn test_growth_percent() {
        assert_eq!(trend().growth_percent(), 100.0);
        let flat = Trend {
            growth_data: vec![],
            ..trend()
        };
        assert_eq!(flat.growth_percent(), 0.0);
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::High > Level::Medium);
        assert!(Level::Medium > Level::Low);
    }

    #[test]
    fn test_score_out_of_range_fails_validation() {
        let bad = Trend {
            opportunity_score: 101,
            ..trend()
        };
        assert!(bad.validate().is_err());
    }
}
