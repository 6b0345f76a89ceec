use shared::{LatencyProfile, ServiceConfig};

pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Relative URLs work behind both the Trunk dev proxy and a production reverse proxy.
        // Nothing is fetched yet; the mock services only log these endpoints.
        "/api".to_string()
    }

    pub fn log_level() -> log::Level {
        if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }

    /// Service settings for the browser build, with simulated network delays.
    pub fn services() -> ServiceConfig {
        ServiceConfig {
            latency: LatencyProfile::default(),
            api_base_url: Self::api_base_url(),
        }
    }
}
