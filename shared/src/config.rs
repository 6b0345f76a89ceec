use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Artificial delays (milliseconds) applied by the mock services so loading
/// states behave like they would against a real backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyProfile {
    pub overview_ms: u64,
    pub videos_ms: u64,
    pub video_detail_ms: u64,
    pub audience_ms: u64,
    pub export_ms: u64,
    pub login_ms: u64,
    pub signup_ms: u64,
    pub logout_ms: u64,
    pub password_ms: u64,
    pub trends_ms: u64,
    pub lookup_ms: u64,
    pub insights_ms: u64,
    pub action_ms: u64,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            overview_ms: 800,
            videos_ms: 500,
            video_detail_ms: 400,
            audience_ms: 600,
            export_ms: 2000,
            login_ms: 1000,
            signup_ms: 1500,
            logout_ms: 200,
            password_ms: 1000,
            trends_ms: 700,
            lookup_ms: 300,
            insights_ms: 600,
            action_ms: 300,
        }
    }
}

impl LatencyProfile {
    /// No delays at all. Used by tests.
    pub fn instant() -> Self {
        Self {
            overview_ms: 0,
            videos_ms: 0,
            video_detail_ms: 0,
            audience_ms: 0,
            export_ms: 0,
            login_ms: 0,
            signup_ms: 0,
            logout_ms: 0,
            password_ms: 0,
            trends_ms: 0,
            lookup_ms: 0,
            insights_ms: 0,
            action_ms: 0,
        }
    }

    pub fn duration(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }
}

/// Settings shared by all mock services
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub latency: LatencyProfile,
    /// Base URL of a future REST backend. Empty means relative paths.
    pub api_base_url: String,
}

impl ServiceConfig {
    pub fn instant() -> Self {
        Self {
            latency: LatencyProfile::instant(),
            ..Default::default()
        }
    }

    /// Joins `path` onto the configured base URL.
    pub fn api_url(&self, path: &str) -> String {
        if self.api_base_url.is_empty() {
            path.to_string()
        } else {
            format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays_stay_within_simulated_network_range() {
        let profile = LatencyProfile::default();
        for ms in [
            profile.overview_ms,
            profile.videos_ms,
            profile.video_detail_ms,
            profile.audience_ms,
            profile.export_ms,
            profile.login_ms,
            profile.signup_ms,
            profile.logout_ms,
            profile.password_ms,
            profile.trends_ms,
            profile.lookup_ms,
            profile.insights_ms,
            profile.action_ms,
        ] {
            assert!((200..=2000).contains(&ms), "{}ms outside 200..=2000", ms);
        }
    }

    #[test]
    fn test_api_url() {
        let relative = ServiceConfig::default();
        assert_eq!(relative.api_url("/analytics/overview"), "/analytics/overview");

        let absolute = ServiceConfig {
            api_base_url: "https://api.example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            absolute.api_url("/trends"),
            "https://api.example.com/trends"
        );
    }
}
