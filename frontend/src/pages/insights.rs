use shared::hooks::run_query_with;
use shared::{Insight, InsightStatus, InsightTriage, Query};
use std::collections::BTreeSet;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::common_toast::{use_toast, Toast};
use crate::components::widgets::{ErrorPanel, Skeleton};
use crate::services::use_services;

#[derive(Clone, Copy, PartialEq)]
enum Triage {
    Apply,
    Dismiss,
}

#[derive(Default, PartialEq)]
struct TriageState(InsightTriage);

impl Reducible for TriageState {
    type Action = (String, Triage);

    fn reduce(self: Rc<Self>, (id, action): Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            Triage::Apply => next.apply(&id),
            Triage::Dismiss => next.dismiss(&id),
        }
        Rc::new(Self(next))
    }
}

#[function_component(Insights)]
pub fn insights() -> Html {
    let services = use_services();
    let toast = use_toast();
    let insights = use_mut_ref(Query::<Vec<Insight>>::new);
    let triage = use_reducer(TriageState::default);
    let category = use_state(|| None::<String>);
    let update = use_force_update();

    let load = {
        let services = services.clone();
        let insights = insights.clone();
        let update = update.clone();
        Callback::from(move |category: Option<String>| {
            let service = services.trends.clone();
            let insights = insights.clone();
            let update = update.clone();
            let ticket = insights.borrow_mut().begin();
            update.force_update();
            spawn_local(async move {
                run_query_with(&insights, ticket, service.get_insights(category.as_deref())).await;
                update.force_update();
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((*category).clone(), move |category| {
            load.emit(category.clone());
            || ()
        });
    }

    let on_triage = {
        let triage = triage.clone();
        Callback::from(move |(id, action): (String, Triage)| {
            let service = services.trends.clone();
            let triage = triage.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let result = match action {
                    Triage::Apply => service.apply_insight(&id).await,
                    Triage::Dismiss => service.dismiss_insight(&id).await,
                };
                match result {
                    Ok(response) => {
                        triage.dispatch((id, action));
                        toast.emit(Toast::success(response.message));
                    }
                    Err(e) => toast.emit(Toast::from_error(&e)),
                }
            });
        })
    };

    let state = insights.borrow().clone();
    let body = if let Some(list) = state.data() {
        let visible = triage.0.visible(list);
        if visible.is_empty() {
            html! { <p class="empty">{"You're all caught up."}</p> }
        } else {
            visible
                .into_iter()
                .map(|insight| {
                    html! {
                        <InsightCard
                            key={insight.id.clone()}
                            insight={insight.clone()}
                            status={triage.0.status(&insight.id)}
                            on_triage={on_triage.clone()}
                        />
                    }
                })
                .collect::<Html>()
        }
    } else if let Some(message) = state.error() {
        let retry = {
            let load = load.clone();
            let category = (*category).clone();
            Callback::from(move |_: ()| load.emit(category.clone()))
        };
        html! { <ErrorPanel message={message.to_string()} on_retry={retry} /> }
    } else {
        html! { <Skeleton /> }
    };

    // Category chips come from whatever the unfiltered list contained last.
    let categories: BTreeSet<String> = state
        .data()
        .map(|list| list.iter().map(|i| i.category.clone()).collect())
        .unwrap_or_default();

    html! {
        <div class="page insights">
            <header class="page-header">
                <h1>{"Insights"}</h1>
                <span class="muted">{format!("{} applied this session", triage.0.applied_count())}</span>
            </header>
            <nav class="category-tabs">
                <button
                    class={classes!("tab", category.is_none().then_some("active"))}
                    onclick={{
                        let category = category.clone();
                        Callback::from(move |_: MouseEvent| category.set(None))
                    }}
                >
                    {"All"}
                </button>
                if category.is_none() {
                    {for categories.into_iter().map(|name| {
                        let category = category.clone();
                        let value = name.clone();
                        html! {
                            <button class="tab" onclick={Callback::from(move |_: MouseEvent| category.set(Some(value.clone())))}>
                                {name}
                            </button>
                        }
                    })}
                } else {
                    <button class="tab active">{(*category).clone().unwrap_or_default()}</button>
                }
            </nav>
            <div class="insight-list">{body}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct InsightCardProps {
    insight: Insight,
    status: InsightStatus,
    on_triage: Callback<(String, Triage)>,
}

#[function_component(InsightCard)]
fn insight_card(props: &InsightCardProps) -> Html {
    let insight = &props.insight;
    let emit = |action: Triage| {
        let on_triage = props.on_triage.clone();
        let id = insight.id.clone();
        Callback::from(move |_: MouseEvent| on_triage.emit((id.clone(), action)))
    };

    html! {
        <article class={classes!("insight-card", insight.priority.as_str())}>
            <header>
                <span class={classes!("icon", format!("icon-{}", insight.icon))}></span>
                <h3>{&insight.title}</h3>
                <span class="badge">{format!("{} priority", insight.priority)}</span>
            </header>
            <p>{&insight.message}</p>
            <p class="impact">{&insight.impact}</p>
            if !insight.actions.is_empty() {
                <ul class="actions">
                    {for insight.actions.iter().map(|action| html! { <li>{action}</li> })}
                </ul>
            }
            if props.status == InsightStatus::Applied {
                <span class="badge applied">{"Applied"}</span>
            } else if insight.actionable {
                <div class="card-actions">
                    <button class="btn btn-primary" onclick={emit(Triage::Apply)}>{"Apply"}</button>
                    <button class="btn" onclick={emit(Triage::Dismiss)}>{"Dismiss"}</button>
                </div>
            } else {
                <button class="btn" onclick={emit(Triage::Dismiss)}>{"Dismiss"}</button>
            }
        </article>
    }
}
