use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use crate::auth::{AuthProvider, use_auth};
use crate::components::nav::Nav;
use crate::components::common_toast::ToastProvider;
use crate::config::Config;
use crate::services::Services;
use crate::theme::ThemeProvider;

pub mod auth;
pub mod components;
pub mod config;
pub mod format;
pub mod hooks;
pub mod services;
pub mod storage;
pub mod theme;
pub mod pages {
    pub mod landing;
    pub mod login;
    pub mod signup;
    pub mod forgot_password;
    pub mod reset_password;
    pub mod dashboard;
    pub mod trends;
    pub mod insights;
    pub mod audience;
    pub mod settings;
    pub mod not_found;
}

use pages::{
    landing::Landing, login::Login, signup::Signup, forgot_password::ForgotPassword,
    reset_password::ResetPassword, dashboard::Dashboard, trends::Trends, insights::Insights,
    audience::Audience, settings::Settings, not_found::NotFound,
};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/dashboard")]
    Dashboard,
    #[at("/trends")]
    Trends,
    #[at("/insights")]
    Insights,
    #[at("/audience")]
    Audience,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/not-found")]
    NotFound,
}

/// Who may see a route
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Auth forms; signed-in users are sent to the dashboard
    PublicOnly,
    Protected,
}

impl Access {
    /// Where to send the visitor instead, if anywhere.
    pub fn redirect(&self, authenticated: bool) -> Option<Route> {
        match (self, authenticated) {
            (Access::Protected, false) => Some(Route::Login),
            (Access::PublicOnly, true) => Some(Route::Dashboard),
            _ => None,
        }
    }
}

impl Route {
    pub fn access(&self) -> Access {
        match self {
            Route::Landing | Route::NotFound => Access::Public,
            Route::Login | Route::Signup | Route::ForgotPassword | Route::ResetPassword => {
                Access::PublicOnly
            }
            Route::Dashboard
            | Route::Trends
            | Route::Insights
            | Route::Audience
            | Route::Settings => Access::Protected,
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    let services = use_memo((), |_| Services::browser().map_err(|e| e.user_message()));

    match &*services {
        Ok(services) => html! {
            <ToastProvider>
                <ContextProvider<Services> context={services.clone()}>
                    <ThemeProvider>
                        <AuthProvider>
                            <BrowserRouter>
                                <div class="app-container">
                                    <Nav />
                                    <main class="app-main">
                                        <Switch<Route> render={switch} />
                                    </main>
                                </div>
                            </BrowserRouter>
                        </AuthProvider>
                    </ThemeProvider>
                </ContextProvider<Services>>
            </ToastProvider>
        },
        Err(message) => {
            error!("Failed to start dashboard: {}", message);
            html! {
                <div class="fatal-error" role="alert">
                    <h1>{"Something went wrong"}</h1>
                    <p>{message}</p>
                    <a href="/">{"Go home"}</a>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub access: Access,
    pub children: Children,
}

/// Renders its children only when `access` allows the current visitor,
/// otherwise navigates away.
#[function_component(RouteGuard)]
pub fn route_guard(props: &GuardProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let redirect = props.access.redirect(auth.state.is_authenticated());

    {
        let redirect = redirect.clone();
        use_effect_with(redirect, move |redirect| {
            if let (Some(target), Some(navigator)) = (redirect, navigator) {
                debug!("Redirecting to {:?}", target);
                navigator.replace(target);
            }
            || ()
        });
    }

    if redirect.is_none() {
        html! {
            <>
                {props.children.clone()}
            </>
        }
    } else {
        html! {}
    }
}

fn guarded(route: &Route, page: Html) -> Html {
    html! {
        <RouteGuard access={route.access()}>
            {page}
        </RouteGuard>
    }
}

fn switch(route: Route) -> Html {
    debug!("Route switch: {:?}", route);
    let page = match &route {
        Route::Landing => html! { <Landing /> },
        Route::Login => html! { <Login /> },
        Route::Signup => html! { <Signup /> },
        Route::ForgotPassword => html! { <ForgotPassword /> },
        Route::ResetPassword => html! { <ResetPassword /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Trends => html! { <Trends /> },
        Route::Insights => html! { <Insights /> },
        Route::Audience => html! { <Audience /> },
        Route::Settings => html! { <Settings /> },
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    };
    guarded(&route, page)
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(Config::log_level()));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    info!("Mounting application to #app");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
