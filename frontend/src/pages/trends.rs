use shared::{Trend, TrendFilter, TrendSortKey, ALL_CATEGORIES};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::common_toast::{use_toast, Toast};
use crate::components::widgets::{ErrorPanel, Skeleton, Sparkline};
use crate::format::{compact_number, signed_percent};
use crate::hooks::use_trends;
use crate::services::use_services;

#[function_component(Trends)]
pub fn trends() -> Html {
    let services = use_services();
    let filter = use_state(TrendFilter::default);
    let trends = use_trends((*filter).clone());
    let categories = use_state(|| vec![ALL_CATEGORIES.to_string()]);

    {
        let categories = categories.clone();
        let service = services.trends.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match service.get_categories().await {
                    Ok(list) => categories.set(list),
                    Err(e) => log::error!("Failed to load categories: {}", e),
                }
            });
            || ()
        });
    }

    let on_category = {
        let filter = filter.clone();
        Callback::from(move |category: String| {
            filter.set(TrendFilter {
                category,
                ..(*filter).clone()
            });
        })
    };

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            filter.set((*filter).clone().with_search(value));
        })
    };

    let on_sort = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(key) = TrendSortKey::ALL.into_iter().find(|k| k.label() == value) {
                filter.set((*filter).clone().with_sort(key));
            }
        })
    };

    let body = if trends.is_pending() {
        html! { <Skeleton /> }
    } else if let Some(message) = trends.query.error() {
        html! { <ErrorPanel message={message.to_string()} on_retry={trends.refresh.clone()} /> }
    } else {
        match trends.query.data() {
            Some(list) if list.is_empty() => html! {
                <p class="empty">{"No trends match your filters."}</p>
            },
            Some(list) => html! {
                <div class="trend-grid">
                    {for list.iter().map(|trend| html! { <TrendCard key={trend.id.clone()} trend={trend.clone()} /> })}
                </div>
            },
            None => html! {},
        }
    };

    html! {
        <div class="page trends">
            <header class="page-header">
                <h1>{"Trending topics"}</h1>
                <input
                    class="search"
                    type="search"
                    placeholder="Search topics or hashtags"
                    value={filter.search.clone()}
                    oninput={on_search}
                />
                <select onchange={on_sort}>
                    {for TrendSortKey::ALL.iter().map(|key| html! {
                        <option value={key.label()} selected={*key == filter.sort_by}>{key.label()}</option>
                    })}
                </select>
            </header>
            <nav class="category-tabs">
                {for categories.iter().map(|category| {
                    let on_category = on_category.clone();
                    let value = category.clone();
                    let active = filter.category.eq_ignore_ascii_case(category);
                    html! {
                        <button
                            class={classes!("tab", active.then_some("active"))}
                            onclick={Callback::from(move |_: MouseEvent| on_category.emit(value.clone()))}
                        >
                            {if category == ALL_CATEGORIES { "All".to_string() } else { category.clone() }}
                        </button>
                    }
                })}
            </nav>
            {body}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TrendCardProps {
    trend: Trend,
}

#[function_component(TrendCard)]
fn trend_card(props: &TrendCardProps) -> Html {
    let services = use_services();
    let toast = use_toast();
    let trend = &props.trend;

    let on_bookmark = {
        let id = trend.id.clone();
        Callback::from(move |_: MouseEvent| {
            let service = services.trends.clone();
            let toast = toast.clone();
            let id = id.clone();
            spawn_local(async move {
                match service.bookmark_trend(&id).await {
                    Ok(response) => toast.emit(Toast::success(response.message)),
                    Err(e) => toast.emit(Toast::from_error(&e)),
                }
            });
        })
    };

    html! {
        <article class="trend-card">
            <header>
                <h3>{&trend.topic}</h3>
                <span class={classes!("badge", trend.strength.as_str())}>{trend.strength.to_string()}</span>
            </header>
            <p>{&trend.description}</p>
            <dl>
                <dt>{"Search volume"}</dt><dd>{compact_number(trend.search_volume)}</dd>
                <dt>{"Opportunity"}</dt><dd>{format!("{}/100", trend.opportunity_score)}</dd>
                <dt>{"Growth"}</dt><dd>{signed_percent(trend.growth_percent())}</dd>
            </dl>
            <Sparkline values={trend.growth_data.clone()} />
            <div class="hashtags">
                {for trend.hashtags.iter().map(|tag| html! { <span class="hashtag">{tag}</span> })}
            </div>
            if trend.covered {
                <span class="muted">{"You've covered this topic"}</span>
            }
            <button class="btn" onclick={on_bookmark}>{"Bookmark"}</button>
        </article>
    }
}
