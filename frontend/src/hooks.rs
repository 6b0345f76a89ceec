//! Yew bindings for the shared data hooks.
//!
//! The shared hook owns the query state and the request guard; these wrappers
//! only trigger fetches from effects and re-render when a fetch settles.

use crate::services::use_services;
use shared::{AnalyticsHook, AnalyticsSnapshot, DateRange, Query, Trend, TrendFilter, TrendsHook};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Current query state plus a way to re-run it with the same parameters.
#[derive(Clone, PartialEq)]
pub struct QueryHandle<T> {
    pub query: Query<T>,
    pub refresh: Callback<()>,
}

impl<T> QueryHandle<T> {
    /// Idle counts as loading: the first fetch is always about to start.
    pub fn is_pending(&self) -> bool {
        matches!(
            self.query.state(),
            shared::QueryState::Idle | shared::QueryState::Loading
        )
    }
}

#[hook]
pub fn use_analytics(range: DateRange) -> QueryHandle<AnalyticsSnapshot> {
    let services = use_services();
    let hook = use_memo((), move |_| AnalyticsHook::new(services.analytics.clone()));
    let update = use_force_update();

    let load = {
        let hook = hook.clone();
        let update = update.clone();
        Callback::from(move |range: DateRange| {
            // Loading is set before this re-render, not when the task first runs.
            let pending = hook.start(range);
            let task_update = update.clone();
            spawn_local(async move {
                pending.await;
                task_update.force_update();
            });
            update.force_update();
        })
    };

    {
        let load = load.clone();
        use_effect_with(range, move |range| {
            load.emit(*range);
            || ()
        });
    }

    let refresh = {
        let hook = hook.clone();
        Callback::from(move |_: ()| load.emit(hook.range()))
    };

    QueryHandle {
        query: hook.snapshot(),
        refresh,
    }
}

#[hook]
pub fn use_trends(filter: TrendFilter) -> QueryHandle<Vec<Trend>> {
    let services = use_services();
    let hook = use_memo((), move |_| TrendsHook::new(services.trends.clone()));
    let update = use_force_update();

    let load = {
        let hook = hook.clone();
        let update = update.clone();
        Callback::from(move |filter: TrendFilter| {
            // Loading is set before this re-render, not when the task first runs.
            let pending = hook.start(filter);
            let task_update = update.clone();
            spawn_local(async move {
                pending.await;
                task_update.force_update();
            });
            update.force_update();
        })
    };

    {
        let load = load.clone();
        use_effect_with(filter, move |filter| {
            load.emit(filter.clone());
            || ()
        });
    }

    let refresh = {
        let hook = hook.clone();
        Callback::from(move |_: ()| load.emit(hook.filter()))
    };

    QueryHandle {
        query: hook.snapshot(),
        refresh,
    }
}
