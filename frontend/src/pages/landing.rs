use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::use_auth;
use crate::Route;

const FEATURES: [(&str, &str); 3] = [
    ("Channel analytics", "Views, subscribers, engagement and watch time at a glance."),
    ("Trend discovery", "Spot rising topics in your niche before they peak."),
    ("Actionable insights", "Recommendations you can apply in one click."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let auth = use_auth();

    html! {
        <div class="page landing">
            <section class="hero">
                <h1>{"Grow your channel with data, not guesswork"}</h1>
                <p>{"OnlyCreators brings your analytics, trends and insights into one dashboard."}</p>
                <div class="hero-actions">
                    if auth.state.is_authenticated() {
                        <Link<Route> to={Route::Dashboard} classes="btn btn-primary">{"Go to dashboard"}</Link<Route>>
                    } else {
                        <Link<Route> to={Route::Signup} classes="btn btn-primary">{"Get started"}</Link<Route>>
                        <Link<Route> to={Route::Login} classes="btn">{"Log in"}</Link<Route>>
                    }
                </div>
            </section>
            <section class="features">
                {for FEATURES.iter().map(|(title, blurb)| html! {
                    <article class="feature">
                        <h3>{*title}</h3>
                        <p>{*blurb}</p>
                    </article>
                })}
            </section>
        </div>
    }
}
