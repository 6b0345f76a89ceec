use shared::hooks::run_query_with;
use shared::{DemographicData, Query};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::widgets::{BarList, ErrorPanel, Skeleton};
use crate::format::compact_number;
use crate::services::use_services;

#[function_component(Audience)]
pub fn audience() -> Html {
    let services = use_services();
    let demographics = use_mut_ref(Query::<DemographicData>::new);
    let update = use_force_update();

    let load = {
        let demographics = demographics.clone();
        Callback::from(move |_: ()| {
            let service = services.analytics.clone();
            let demographics = demographics.clone();
            let update = update.clone();
            let ticket = demographics.borrow_mut().begin();
            update.force_update();
            spawn_local(async move {
                run_query_with(&demographics, ticket, service.get_audience()).await;
                update.force_update();
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(());
            || ()
        });
    }

    let state = demographics.borrow().clone();
    let body = match (state.data(), state.error()) {
        (Some(data), _) => html! {
            <div class="audience-grid">
                <section class="panel">
                    <h3>{"Age"}</h3>
                    <BarList rows={data.age_groups.iter().map(|g| (g.range.clone(), g.percentage)).collect::<Vec<_>>()} />
                </section>
                <section class="panel">
                    <h3>{"Gender"}</h3>
                    <BarList rows={data.gender.iter().map(|g| (g.label.clone(), g.percentage)).collect::<Vec<_>>()} />
                </section>
                <section class="panel">
                    <h3>{"Devices"}</h3>
                    <BarList rows={data.devices.iter().map(|d| (d.device.clone(), d.percentage)).collect::<Vec<_>>()} />
                </section>
                <section class="panel">
                    <h3>{"Top countries"}</h3>
                    <table>
                        <tbody>
                            {for data.top_countries.iter().map(|c| html! {
                                <tr>
                                    <td>{&c.country}</td>
                                    <td>{compact_number(c.views)}</td>
                                    <td>{format!("{:.1}%", c.percentage)}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </section>
            </div>
        },
        (None, Some(message)) => html! {
            <ErrorPanel message={message.to_string()} on_retry={load.clone()} />
        },
        (None, None) => html! { <Skeleton /> },
    };

    html! {
        <div class="page audience">
            <header class="page-header">
                <h1>{"Audience"}</h1>
            </header>
            {body}
        </div>
    }
}
