pub mod models {
    pub mod user;
    pub mod analytics;
    pub mod video;
    pub mod trend;
    pub mod insight;
    pub mod client_storage;
}

pub mod dto {
    pub mod auth;
    pub mod common;
    pub mod analytics;
    pub mod trends;
}

pub mod services {
    pub mod latency;
    pub mod analytics;
    pub mod auth;
    pub mod trends;
}

pub mod config;
pub mod error;
pub mod hooks;
pub mod mock_data;
pub mod query;
pub mod series;
pub mod session;
pub mod theme;
pub mod validation;

// Re-export commonly used items
pub use error::{SharedError, Result};
pub use config::{LatencyProfile, ServiceConfig};
pub use mock_data::MockDataStore;
pub use query::{Query, QueryState, RequestTicket};
pub use session::Session;
pub use theme::{ThemePreference, ThemeState};

// Re-export models
pub use models::{
    user::{ConnectedAccounts, User, UserUpdate},
    analytics::{
        AnalyticsSnapshot, DateRange, DemographicData, EngagementBreakdown, Sparklines,
        VideoDetail, ViewsPoint,
    },
    video::Video,
    trend::{Level, Trend},
    insight::{Insight, InsightStatus, InsightTriage},
    client_storage::{ClientStorage, MemoryStorage, StorageError, StorageKey},
};

// Re-export DTOs
pub use dto::{
    auth::{AuthResponse, ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, SignupRequest},
    common::{ActionResponse, SortOrder},
    analytics::{ExportFormat, VideoQuery, VideoSortField},
    trends::{TrendFilter, TrendSortKey, ALL_CATEGORIES},
};

// Re-export services
pub use services::{
    latency::{Latency, NoLatency},
    analytics::AnalyticsService,
    auth::AuthService,
    trends::TrendsService,
};

pub use hooks::{AnalyticsHook, TrendsHook};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_dataset_loads() {
        let store = MockDataStore::embedded().unwrap();
        assert_eq!(store.user().id, "creator-001");
        assert_eq!(store.videos().len(), 8);
        assert_eq!(store.trends().len(), 8);
        assert_eq!(store.insights().len(), 6);
    }

    #[test]
    fn test_user_creation() {
        let user = User {
            channel_name: "Test Channel".to_string(),
            ..MockDataStore::embedded().unwrap().user().clone()
        };

        assert_eq!(user.channel_name, "Test Channel");
        assert!(user.validate_fields().is_ok());
    }
}
