use yew::prelude::*;
use yew::events::SubmitEvent;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use log::debug;
use shared::validation::{FieldErrors, LoginForm};

use crate::auth::use_auth;
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let form = use_state(LoginForm::default);
    let errors = use_state(FieldErrors::new);
    let auth = use_auth();

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let auth = auth.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = form.validate();
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());
            debug!("Submitting login for {}", form.email);
            auth.login.emit((form.email.clone(), form.password.clone()));
        })
    };

    let onemailinput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };

    let onpasswordinput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                password: input.value(),
                ..(*form).clone()
            });
        })
    };

    let loading = auth.state.loading;

    html! {
        <div class="auth-page">
            <form class="auth-card" onsubmit={onsubmit} novalidate=true>
                <h2>{"Welcome back"}</h2>
                <label for="email">{"Email address"}</label>
                <input
                    id="email"
                    type="email"
                    placeholder="you@example.com"
                    value={form.email.clone()}
                    oninput={onemailinput}
                />
                if let Some(message) = errors.get("email") {
                    <p class="field-error">{message}</p>
                }
                <label for="password">{"Password"}</label>
                <input
                    id="password"
                    type="password"
                    value={form.password.clone()}
                    oninput={onpasswordinput}
                />
                if let Some(message) = errors.get("password") {
                    <p class="field-error">{message}</p>
                }
                if let Some(message) = &auth.state.error {
                    <p class="form-error">{message}</p>
                }
                <button type="submit" class="btn btn-primary" disabled={loading}>
                    if loading { {"Signing in..."} } else { {"Sign in"} }
                </button>
                <div class="auth-links">
                    <Link<Route> to={Route::ForgotPassword}>{"Forgot password?"}</Link<Route>>
                    <Link<Route> to={Route::Signup}>{"Create an account"}</Link<Route>>
                </div>
            </form>
        </div>
    }
}
