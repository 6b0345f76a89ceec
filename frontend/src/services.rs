use crate::config::Config;
use crate::storage::BrowserStorage;
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use shared::{
    AnalyticsService, AuthService, ClientStorage, Latency, MockDataStore, SharedError,
    TrendsService,
};
use std::rc::Rc;
use std::time::Duration;
use yew::prelude::*;

/// Sleeps on a browser `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooLatency;

#[async_trait(?Send)]
impl Latency for GlooLatency {
    async fn sleep(&self, duration: Duration) {
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(ms).await;
    }
}

/// Service handles shared by every page through a Yew context.
#[derive(Clone)]
pub struct Services {
    pub analytics: Rc<AnalyticsService>,
    pub auth: Rc<AuthService>,
    pub trends: Rc<TrendsService>,
    pub storage: Rc<dyn ClientStorage>,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.analytics, &other.analytics)
            && Rc::ptr_eq(&self.auth, &other.auth)
            && Rc::ptr_eq(&self.trends, &other.trends)
    }
}

impl Services {
    /// Wires the mock services over the embedded dataset and `localStorage`.
    pub fn browser() -> Result<Self, SharedError> {
        let store = MockDataStore::embedded()?;
        let latency: Rc<dyn Latency> = Rc::new(GlooLatency);
        let storage: Rc<dyn ClientStorage> = Rc::new(BrowserStorage);
        let config = Config::services();

        Ok(Self {
            analytics: Rc::new(AnalyticsService::new(
                store.clone(),
                latency.clone(),
                config.clone(),
            )),
            auth: Rc::new(AuthService::new(
                store.clone(),
                storage.clone(),
                latency.clone(),
                config.clone(),
            )),
            trends: Rc::new(TrendsService::new(store, latency, config)),
            storage,
        })
    }
}

#[hook]
pub fn use_services() -> Services {
    use_context::<Services>().expect("Services context not found")
}
