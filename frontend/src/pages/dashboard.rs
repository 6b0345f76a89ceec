use log::info;
use shared::hooks::run_query_with;
use shared::{
    DateRange, ExportFormat, Query, SortOrder, Video, VideoDetail, VideoQuery, VideoSortField,
    ViewsPoint,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::auth::use_auth;
use crate::components::common_toast::{use_toast, Toast};
use crate::components::widgets::{ErrorPanel, Skeleton, Sparkline, StatCard};
use crate::format::{compact_number, percent, updated_at};
use crate::hooks::use_analytics;
use crate::services::use_services;

const TOP_VIDEOS: usize = 5;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_auth();
    let range = use_state(DateRange::default);
    let analytics = use_analytics(*range);

    let on_range_change = {
        let range = range.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Ok(next) = value.parse::<DateRange>() {
                range.set(next);
            }
        })
    };

    let on_refresh = {
        let refresh = analytics.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let greeting = auth
        .state
        .user
        .as_ref()
        .map(|user| format!("Welcome back, {}", user.name))
        .unwrap_or_else(|| "Welcome back".to_string());

    let body = if analytics.is_pending() {
        html! { <Skeleton /> }
    } else if let Some(message) = analytics.query.error() {
        html! { <ErrorPanel message={message.to_string()} on_retry={analytics.refresh.clone()} /> }
    } else if let Some(snapshot) = analytics.query.data() {
        html! {
            <>
                <section class="stat-grid">
                    <StatCard label="Total views" value={compact_number(snapshot.total_views)}
                        change={snapshot.views_change} sparkline={snapshot.sparklines.views.clone()} />
                    <StatCard label="Subscribers" value={compact_number(snapshot.total_subscribers)}
                        change={snapshot.subscribers_change} sparkline={snapshot.sparklines.subscribers.clone()} />
                    <StatCard label="Engagement rate" value={percent(snapshot.engagement_rate)}
                        change={snapshot.engagement_change} sparkline={snapshot.sparklines.engagement.clone()} />
                    <StatCard label="Watch time (h)" value={compact_number(snapshot.watch_time_hours)}
                        change={snapshot.watch_time_change} sparkline={snapshot.sparklines.watch_time.clone()} />
                </section>
                <section class="panel">
                    <h3>{"Engagement"}</h3>
                    <dl class="engagement">
                        <dt>{"Likes"}</dt><dd>{compact_number(snapshot.engagement_breakdown.likes)}</dd>
                        <dt>{"Comments"}</dt><dd>{compact_number(snapshot.engagement_breakdown.comments)}</dd>
                        <dt>{"Shares"}</dt><dd>{compact_number(snapshot.engagement_breakdown.shares)}</dd>
                        <dt>{"Saves"}</dt><dd>{compact_number(snapshot.engagement_breakdown.saves)}</dd>
                        <dt>{"Total"}</dt><dd>{compact_number(snapshot.engagement_breakdown.total())}</dd>
                    </dl>
                </section>
            </>
        }
    } else {
        html! {}
    };

    html! {
        <div class="page dashboard">
            <header class="page-header">
                <h1>{greeting}</h1>
                <div class="page-actions">
                    <select onchange={on_range_change}>
                        {for DateRange::ALL.iter().map(|option| html! {
                            <option value={option.as_str()} selected={*option == *range}>{option.label()}</option>
                        })}
                    </select>
                    <button class="btn" onclick={on_refresh} disabled={analytics.query.is_loading()}>{"Refresh"}</button>
                    <ExportButton />
                </div>
                if let Some(stamp) = analytics.query.last_updated() {
                    <span class="muted">{format!("Last updated {}", updated_at(stamp))}</span>
                }
            </header>
            {body}
            <ViewsOverTime range={*range} />
            <TopVideos />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ViewsOverTimeProps {
    range: DateRange,
}

/// Daily views for the selected range, fetched separately from the overview.
#[function_component(ViewsOverTime)]
fn views_over_time(props: &ViewsOverTimeProps) -> Html {
    let services = use_services();
    let points = use_mut_ref(Query::<Vec<ViewsPoint>>::new);
    let update = use_force_update();

    {
        let points = points.clone();
        use_effect_with(props.range, move |range| {
            let range = *range;
            let ticket = points.borrow_mut().begin();
            update.force_update();
            spawn_local(async move {
                run_query_with(&points, ticket, services.analytics.get_views_over_time(range)).await;
                update.force_update();
            });
            || ()
        });
    }

    let state = points.borrow().clone();
    html! {
        <section class="panel">
            <h3>{format!("Views over time ({})", props.range.label())}</h3>
            if let Some(points) = state.data() {
                <Sparkline values={points.iter().map(|p| p.views).collect::<Vec<_>>()} />
                <div class="axis">
                    <span>{points.first().map(|p| p.date.clone()).unwrap_or_default()}</span>
                    <span>{points.last().map(|p| p.date.clone()).unwrap_or_default()}</span>
                </div>
            } else if let Some(message) = state.error() {
                <p class="field-error">{message}</p>
            } else {
                <Skeleton />
            }
        </section>
    }
}

#[function_component(ExportButton)]
fn export_button() -> Html {
    let services = use_services();
    let toast = use_toast();
    let exporting = use_state(|| false);

    let onclick = {
        let exporting = exporting.clone();
        Callback::from(move |_: MouseEvent| {
            let service = services.analytics.clone();
            let exporting = exporting.clone();
            let toast = toast.clone();
            exporting.set(true);
            spawn_local(async move {
                match service.export_report(ExportFormat::new("csv")).await {
                    Ok(response) => {
                        info!("{}", response.message);
                        toast.emit(Toast::success(response.message));
                    }
                    Err(e) => toast.emit(Toast::from_error(&e)),
                }
                exporting.set(false);
            });
        })
    };

    html! {
        <button class="btn btn-primary" {onclick} disabled={*exporting}>
            if *exporting { {"Exporting..."} } else { {"Export CSV"} }
        </button>
    }
}

#[function_component(TopVideos)]
fn top_videos() -> Html {
    let services = use_services();
    let toast = use_toast();
    let query = use_state(|| VideoQuery::new(VideoSortField::Views, SortOrder::Desc).with_limit(TOP_VIDEOS));
    let videos = use_mut_ref(Query::<Vec<Video>>::new);
    let detail = use_state(|| None::<VideoDetail>);
    let update = use_force_update();

    {
        let services = services.clone();
        let videos = videos.clone();
        let update = update.clone();
        use_effect_with((*query).clone(), move |query| {
            let query = query.clone();
            let ticket = videos.borrow_mut().begin();
            update.force_update();
            spawn_local(async move {
                run_query_with(&videos, ticket, services.analytics.get_videos(query)).await;
                update.force_update();
            });
            || ()
        });
    }

    let on_sort = {
        let query = query.clone();
        Callback::from(move |field: VideoSortField| {
            let order = if query.sort_by == field {
                query.order.toggled()
            } else {
                SortOrder::Desc
            };
            query.set(VideoQuery::new(field, order).with_limit(TOP_VIDEOS));
        })
    };

    let on_select = {
        let detail = detail.clone();
        Callback::from(move |id: String| {
            let service = services.analytics.clone();
            let detail = detail.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match service.get_video_analytics(&id).await {
                    Ok(found) => detail.set(Some(found)),
                    Err(e) => toast.emit(Toast::from_error(&e)),
                }
            });
        })
    };

    let on_close = {
        let detail = detail.clone();
        Callback::from(move |_: MouseEvent| detail.set(None))
    };

    let state = videos.borrow().clone();
    let rows = match state.data() {
        Some(list) => list
            .iter()
            .map(|video| {
                let on_select = on_select.clone();
                let id = video.id.clone();
                html! {
                    <tr key={video.id.clone()} onclick={Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))}>
                        <td>{&video.title}</td>
                        <td>{compact_number(video.views)}</td>
                        <td>{compact_number(video.likes)}</td>
                        <td>{percent(video.engagement_rate)}</td>
                        <td>{video.formatted_duration()}</td>
                        <td>{&video.published_at}</td>
                    </tr>
                }
            })
            .collect::<Html>(),
        None if state.error().is_some() => html! {
            <tr><td colspan="6">{state.error().unwrap_or_default()}</td></tr>
        },
        None => html! { <tr><td colspan="6">{"Loading videos..."}</td></tr> },
    };

    html! {
        <section class="panel">
            <h3>{"Top videos"}</h3>
            <table class="video-table">
                <thead>
                    <tr>
                        <th>{"Title"}</th>
                        {for VideoSortField::ALL.into_iter().map(|field| {
                            let on_sort = on_sort.clone();
                            let active = query.sort_by == field;
                            html! {
                                <th class={classes!("sortable", active.then_some("active"))}
                                    onclick={Callback::from(move |_: MouseEvent| on_sort.emit(field))}>
                                    {field.label()}
                                </th>
                            }
                        })}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            if let Some(detail) = &*detail {
                <div class="video-detail">
                    <button class="btn-link" onclick={on_close}>{"Close"}</button>
                    <h4>{&detail.video.title}</h4>
                    <h5>{"Daily views"}</h5>
                    <Sparkline values={detail.daily_views.iter().map(|p| p.views).collect::<Vec<_>>()} />
                    <h5>{"Traffic sources"}</h5>
                    <ul>
                        {for detail.traffic_sources.iter().map(|source| html! {
                            <li>{format!("{}: {:.1}%", source.source, source.percentage)}</li>
                        })}
                    </ul>
                    <h5>{"Audience retention"}</h5>
                    <Sparkline values={detail.retention.iter().map(|p| p.percent.round() as u64).collect::<Vec<_>>()} />
                </div>
            }
        </section>
    }
}
