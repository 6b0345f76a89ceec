//! Contract tests for the mock service layer, driven only through the public API.

#![cfg(not(target_arch = "wasm32"))]

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use shared::{
    ActionResponse, AnalyticsHook, AnalyticsService, AuthService, DateRange, Latency,
    MemoryStorage, NoLatency, ServiceConfig, Session, SharedError, SortOrder, TrendFilter,
    TrendsHook, TrendsService, UserUpdate, VideoQuery, VideoSortField,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Each call sleeps for less time than the one before it, so later requests
/// always resolve first.
struct Shrinking {
    next_ms: Cell<u64>,
}

#[async_trait(?Send)]
impl Latency for Shrinking {
    async fn sleep(&self, _duration: Duration) {
        let ms = self.next_ms.get();
        self.next_ms.set(ms / 2);
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

fn analytics() -> AnalyticsService {
    AnalyticsService::embedded(Rc::new(NoLatency), ServiceConfig::instant()).unwrap()
}

fn trends() -> Rc<TrendsService> {
    Rc::new(TrendsService::embedded(Rc::new(NoLatency), ServiceConfig::instant()).unwrap())
}

fn auth(storage: Rc<MemoryStorage>) -> Rc<AuthService> {
    Rc::new(AuthService::embedded(storage, Rc::new(NoLatency), ServiceConfig::instant()).unwrap())
}

#[test_log::test(tokio::test)]
async fn videos_sorted_by_views_follow_the_requested_order() {
    let service = analytics();

    let desc = service
        .get_videos(VideoQuery::new(VideoSortField::Views, SortOrder::Desc))
        .await
        .unwrap();
    assert!(desc.windows(2).all(|w| w[0].views >= w[1].views));

    let asc = service
        .get_videos(VideoQuery::new(VideoSortField::Views, SortOrder::Asc))
        .await
        .unwrap();
    assert!(asc.windows(2).all(|w| w[0].views <= w[1].views));
    assert_eq!(asc.len(), desc.len());
}

#[test_log::test(tokio::test)]
async fn unknown_video_is_not_found() {
    let err = analytics()
        .get_video_analytics("nonexistent-id")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Video not found");
}

#[test_log::test(tokio::test)]
async fn csv_export_reports_upper_case_format() {
    let response = analytics().export_report("csv").await.unwrap();
    assert_eq!(
        response,
        ActionResponse {
            success: true,
            message: "Report exported as CSV".to_string(),
        }
    );
}

#[test_log::test(tokio::test)]
async fn each_login_persists_its_own_email() {
    let storage = Rc::new(MemoryStorage::new());
    let auth = auth(storage.clone());

    auth.login("first@example.com", "pw").await.unwrap();
    let first = auth.verify_token().unwrap().unwrap();
    auth.login("second@example.com", "pw").await.unwrap();
    let second = auth.verify_token().unwrap().unwrap();

    assert_eq!(first.email, "first@example.com");
    assert_eq!(second.email, "second@example.com");
}

#[test_log::test(tokio::test)]
async fn channel_rename_survives_rehydration() {
    let storage = Rc::new(MemoryStorage::new());
    let mut session = Session::hydrate(auth(storage.clone())).unwrap();
    let before = session
        .login("creator@example.com", "pw")
        .await
        .unwrap()
        .clone();

    session.update_user(UserUpdate::channel_name("X")).unwrap();

    let rehydrated = Session::hydrate(auth(storage)).unwrap();
    let user = rehydrated.user().unwrap();
    assert_eq!(user.channel_name, "X");
    assert_eq!(user.id, before.id);
    assert_eq!(user.email, before.email);
    assert_eq!(user.subscriber_count, before.subscriber_count);
    assert_eq!(user.connected_accounts, before.connected_accounts);
}

#[test_log::test(tokio::test)]
async fn update_without_session_is_unauthorized() {
    let auth = auth(Rc::new(MemoryStorage::new()));
    let err = auth.update_user(UserUpdate::channel_name("X")).unwrap_err();
    assert!(matches!(err, SharedError::Unauthorized(_)));
}

#[test_log::test(tokio::test)]
async fn gaming_then_all_categories() {
    let hook = TrendsHook::new(trends());

    hook.load(TrendFilter::category("Gaming")).await;
    let gaming = hook.snapshot().data().cloned().unwrap();
    assert!(gaming.iter().all(|t| t.category == "Gaming"));

    hook.set_category("all").await;
    let all = hook.snapshot().data().cloned().unwrap();
    assert_eq!(all.len(), 8);
}

#[test_log::test(tokio::test(start_paused = true))]
async fn slow_stale_overview_never_overwrites_newer_one() {
    let latency = Rc::new(Shrinking {
        next_ms: Cell::new(800),
    });
    let service = AnalyticsService::embedded(latency, ServiceConfig::default()).unwrap();
    let hook = AnalyticsHook::new(Rc::new(service));

    let (first, second, third) = tokio::join!(
        hook.load(DateRange::Last7Days),
        hook.load(DateRange::Last90Days),
        hook.load(DateRange::LastYear),
    );

    assert_eq!((first, second, third), (false, false, true));
    assert_eq!(hook.range(), DateRange::LastYear);
    assert!(hook.snapshot().data().is_some());
}
