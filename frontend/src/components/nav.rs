use crate::auth::use_auth;
use crate::theme::use_theme;
use crate::Route;
use shared::ThemePreference;
use yew::prelude::*;
use yew_router::prelude::*;

const SECTIONS: [(Route, &str); 5] = [
    (Route::Dashboard, "Dashboard"),
    (Route::Trends, "Trends"),
    (Route::Insights, "Insights"),
    (Route::Audience, "Audience"),
    (Route::Settings, "Settings"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_auth();
    let theme = use_theme();
    let navigator = use_navigator();
    let current_route = use_route::<Route>().unwrap_or(Route::Landing);

    let on_logout_click = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let on_theme_click = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let theme_label = match theme.preference {
        ThemePreference::Light => "Dark mode",
        ThemePreference::Dark => "Light mode",
    };

    html! {
        <nav class="nav">
            <Link<Route> to={Route::Landing} classes="nav-brand">{"OnlyCreators"}</Link<Route>>
            if let Some(user) = &auth.state.user {
                <div class="nav-links">
                    {for SECTIONS.iter().map(|(route, label)| html! {
                        <Link<Route>
                            to={route.clone()}
                            classes={classes!("nav-link", (current_route == *route).then_some("active"))}
                        >
                            {*label}
                        </Link<Route>>
                    })}
                </div>
                <div class="nav-user">
                    <span class="avatar" title={user.name.clone()}>{user.initials()}</span>
                    <span class="channel">{&user.channel_name}</span>
                    <button class="btn-link" onclick={on_logout_click}>{"Log out"}</button>
                </div>
            } else {
                <div class="nav-links">
                    <Link<Route> to={Route::Login} classes="nav-link">{"Log in"}</Link<Route>>
                    <Link<Route> to={Route::Signup} classes="nav-link">{"Sign up"}</Link<Route>>
                </div>
            }
            <button class="btn-link theme-toggle" onclick={on_theme_click}>{theme_label}</button>
        </nav>
    }
}
