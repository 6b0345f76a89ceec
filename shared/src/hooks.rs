//! Framework-neutral data hooks.
//!
//! A hook owns one [`Query`] and the parameters it was last fetched with.
//! Loading goes through [`run_query`], which holds no borrow across the
//! await and commits only the latest-issued request.
//!
//! UI callers that re-render before the fetch is first polled use the
//! `start` methods (or [`run_query_with`]): the ticket is issued and the
//! query is `Loading` by the time they return.

use crate::dto::trends::{TrendFilter, TrendSortKey};
use crate::error::Result;
use crate::models::analytics::{AnalyticsSnapshot, DateRange};
use crate::models::trend::Trend;
use crate::query::{Query, RequestTicket};
use crate::services::analytics::AnalyticsService;
use crate::services::trends::TrendsService;
use log::error;
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

/// Runs `fetch` against `query`. Returns whether the result was committed.
pub async fn run_query<T, F>(query: &RefCell<Query<T>>, fetch: F) -> bool
where
    F: Future<Output = Result<T>>,
{
    let ticket = query.borrow_mut().begin();
    run_query_with(query, ticket, fetch).await
}

/// Completes a fetch whose `ticket` was already issued with [`Query::begin`].
pub async fn run_query_with<T, F>(query: &RefCell<Query<T>>, ticket: RequestTicket, fetch: F) -> bool
where
    F: Future<Output = Result<T>>,
{
    let result = fetch.await;
    if let Err(e) = &result {
        error!("Request {} failed: {}", ticket.id(), e);
    }
    query.borrow_mut().settle(ticket, result)
}

/// Overview analytics for the dashboard
pub struct AnalyticsHook {
    service: Rc<AnalyticsService>,
    query: Rc<RefCell<Query<AnalyticsSnapshot>>>,
    range: Cell<DateRange>,
}

impl AnalyticsHook {
    pub fn new(service: Rc<AnalyticsService>) -> Self {
        Self {
            service,
            query: Rc::new(RefCell::new(Query::new())),
            range: Cell::new(DateRange::default()),
        }
    }

    pub fn range(&self) -> DateRange {
        self.range.get()
    }

    /// Fetches for `range`; called on mount and whenever the range changes.
    pub async fn load(&self, range: DateRange) -> bool {
        self.start(range).await
    }

    /// Marks the query `Loading` for `range` now and returns the pending fetch.
    pub fn start(&self, range: DateRange) -> impl Future<Output = bool> + 'static {
        self.range.set(range);
        let ticket = self.query.borrow_mut().begin();
        let query = Rc::clone(&self.query);
        let service = Rc::clone(&self.service);
        async move { run_query_with(&query, ticket, service.get_overview(range)).await }
    }

    /// Re-fetches with the current range.
    pub async fn refresh(&self) -> bool {
        self.load(self.range()).await
    }

    pub fn snapshot(&self) -> Query<AnalyticsSnapshot> {
        self.query.borrow().clone()
    }

    pub fn shared_query(&self) -> Rc<RefCell<Query<AnalyticsSnapshot>>> {
        Rc::clone(&self.query)
    }
}

/// Filtered trends for the trends page
pub struct TrendsHook {
    service: Rc<TrendsService>,
    query: Rc<RefCell<Query<Vec<Trend>>>>,
    filter: RefCell<TrendFilter>,
}

impl TrendsHook {
    pub fn new(service: Rc<TrendsService>) -> Self {
        Self {
            service,
            query: Rc::new(RefCell::new(Query::new())),
            filter: RefCell::new(TrendFilter::default()),
        }
    }

    pub fn filter(&self) -> TrendFilter {
        self.filter.borrow().clone()
    }

    pub async fn load(&self, filter: TrendFilter) -> bool {
        self.start(filter).await
    }

    /// Marks the query `Loading` for `filter` now and returns the pending fetch.
    pub fn start(&self, filter: TrendFilter) -> impl Future<Output = bool> + 'static {
        *self.filter.borrow_mut() = filter.clone();
        let ticket = self.query.borrow_mut().begin();
        let query = Rc::clone(&self.query);
        let service = Rc::clone(&self.service);
        async move { run_query_with(&query, ticket, service.get_trends(filter)).await }
    }

    pub async fn refresh(&self) -> bool {
        self.load(self.filter()).await
    }

    pub async fn set_category(&self, category: &str) -> bool {
        let filter = TrendFilter {
            category: category.to_string(),
            ..self.filter()
        };
        self.load(filter).await
    }

    pub async fn set_search(&self, search: &str) -> bool {
        let filter = self.filter().with_search(search);
        self.load(filter).await
    }

    pub async fn set_sort(&self, sort_by: TrendSortKey) -> bool {
        let filter = self.filter().with_sort(sort_by);
        self.load(filter).await
    }

    pub fn snapshot(&self) -> Query<Vec<Trend>> {
        self.query.borrow().clone()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use crate::error::SharedError;
    use crate::query::QueryState;
    use crate::services::latency::testing::ScriptedLatency;
    use crate::services::latency::NoLatency;
    use pretty_assertions::assert_eq;

    fn trends_hook() -> TrendsHook {
        let service = TrendsService::embedded(Rc::new(NoLatency), ServiceConfig::instant()).unwrap();
        TrendsHook::new(Rc::new(service))
    }

    #[tokio::test]
    async fn test_analytics_hook_goes_idle_to_ready() {
        let service =
            AnalyticsService::embedded(Rc::new(NoLatency), ServiceConfig::instant()).unwrap();
        let hook = AnalyticsHook::new(Rc::new(service));
        assert_eq!(hook.snapshot().state(), &QueryState::Idle);

        assert!(hook.load(DateRange::Last7Days).await);
        let query = hook.snapshot();
        assert!(query.data().is_some());
        assert!(query.last_updated().is_some());
        assert_eq!(hook.range(), DateRange::Last7Days);

        assert!(hook.refresh().await);
        assert_eq!(hook.range(), DateRange::Last7Days);
    }

    #[tokio::test]
    async fn test_trends_hook_category_switch() {
        let hook = trends_hook();

        hook.set_category("Gaming").await;
        let gaming = hook.snapshot().data().cloned().unwrap();
        assert!(!gaming.is_empty());
        assert!(gaming.iter().all(|t| t.category == "Gaming"));

        hook.set_category("all").await;
        let all = hook.snapshot().data().cloned().unwrap();
        assert!(all.len() > gaming.len());
    }

    #[tokio::test]
    async fn test_search_keeps_category() {
        let hook = trends_hook();
        hook.set_category("Gaming").await;
        hook.set_search("retro").await;

        assert_eq!(hook.filter().category, "Gaming");
        let ids: Vec<String> = hook
            .snapshot()
            .data()
            .unwrap()
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(ids, vec!["trend-002".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latest_issued_request_wins() {
        // First request resolves after 500ms, second after 50ms.
        let latency = ScriptedLatency::new(&[500, 50]);
        let service = TrendsService::embedded(Rc::new(latency), ServiceConfig::default()).unwrap();
        let hook = TrendsHook::new(Rc::new(service));

        let (stale, fresh) = tokio::join!(
            hook.load(TrendFilter::category("Gaming")),
            hook.load(TrendFilter::category("Lifestyle")),
        );

        assert!(!stale);
        assert!(fresh);
        let trends = hook.snapshot().data().cloned().unwrap();
        assert!(trends.iter().all(|t| t.category == "Lifestyle"));
    }

    #[tokio::test]
    async fn test_start_shows_loading_before_first_poll() {
        let service =
            AnalyticsService::embedded(Rc::new(NoLatency), ServiceConfig::instant()).unwrap();
        let hook = AnalyticsHook::new(Rc::new(service));
        assert!(hook.load(DateRange::Last7Days).await);
        assert!(hook.snapshot().data().is_some());

        let pending = hook.start(DateRange::LastYear);
        // Previous data is gone before the fetch has even been polled.
        assert!(hook.snapshot().is_loading());
        assert!(hook.snapshot().data().is_none());
        assert_eq!(hook.range(), DateRange::LastYear);

        assert!(pending.await);
        assert!(hook.snapshot().data().is_some());
    }

    #[tokio::test]
    async fn test_trends_start_supersedes_unpolled_fetch() {
        let hook = trends_hook();
        let stale = hook.start(TrendFilter::category("Gaming"));
        let fresh = hook.start(TrendFilter::category("Lifestyle"));
        assert!(hook.snapshot().is_loading());

        assert!(fresh.await);
        assert!(!stale.await);
        let trends = hook.snapshot().data().cloned().unwrap();
        assert!(trends.iter().all(|t| t.category == "Lifestyle"));
    }

    #[tokio::test]
    async fn test_run_query_with_drops_superseded_ticket() {
        let query = RefCell::new(Query::<u8>::new());
        let first = query.borrow_mut().begin();
        let second = query.borrow_mut().begin();

        assert!(!run_query_with(&query, first, async { Ok(1) }).await);
        assert!(query.borrow().is_loading());
        assert!(run_query_with(&query, second, async { Ok(2) }).await);
        assert_eq!(query.borrow().data(), Some(&2));
    }

    #[tokio::test]
    async fn test_run_query_records_errors() {
        let query = RefCell::new(Query::<u8>::new());
        let committed = run_query(&query, async { Err(SharedError::Transient("timeout".into())) }).await;

        assert!(committed);
        assert_eq!(query.borrow().error(), Some("Temporary failure: timeout"));
    }
}
