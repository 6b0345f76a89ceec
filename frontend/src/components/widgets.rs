use crate::format::{signed_percent, sparkline_heights};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub change: f64,
    #[prop_or_default]
    pub sparkline: Vec<u64>,
}

/// Headline metric with its period-over-period change and a small bar sparkline.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let trend_class = if props.change >= 0.0 { "up" } else { "down" };

    html! {
        <div class="stat-card">
            <span class="stat-label">{&props.label}</span>
            <span class="stat-value">{&props.value}</span>
            <span class={classes!("stat-change", trend_class)}>{signed_percent(props.change)}</span>
            <Sparkline values={props.sparkline.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SparklineProps {
    pub values: Vec<u64>,
}

#[function_component(Sparkline)]
pub fn sparkline(props: &SparklineProps) -> Html {
    html! {
        <div class="sparkline">
            {for sparkline_heights(&props.values).into_iter().map(|height| html! {
                <span class="spark-bar" style={format!("height: {}%", height)}></span>
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BarListProps {
    /// `(label, percentage)` rows
    pub rows: Vec<(String, f64)>,
}

/// Horizontal percentage bars used by the audience breakdowns.
#[function_component(BarList)]
pub fn bar_list(props: &BarListProps) -> Html {
    html! {
        <ul class="bar-list">
            {for props.rows.iter().map(|(label, pct)| html! {
                <li>
                    <span class="bar-label">{label}</span>
                    <span class="bar-track">
                        <span class="bar-fill" style={format!("width: {:.1}%", pct.clamp(0.0, 100.0))}></span>
                    </span>
                    <span class="bar-value">{format!("{:.1}%", pct)}</span>
                </li>
            })}
        </ul>
    }
}

#[function_component(Skeleton)]
pub fn skeleton() -> Html {
    html! {
        <div class="skeleton" aria-busy="true">
            <div class="skeleton-block"></div>
            <div class="skeleton-block"></div>
            <div class="skeleton-block"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    let retry = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_: MouseEvent| on_retry.emit(()));
        html! { <button class="btn" {onclick}>{"Try again"}</button> }
    });

    html! {
        <div class="error-panel" role="alert">
            <p>{&props.message}</p>
            {for retry}
        </div>
    }
}
