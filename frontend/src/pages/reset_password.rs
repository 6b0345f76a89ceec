use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use serde::Deserialize;
use shared::validation::{password_strength, FieldErrors, ResetPasswordForm};

use crate::components::common_toast::{use_toast, Toast};
use crate::services::use_services;
use crate::Route;

/// `?token=` from the emailed link
#[derive(Debug, Default, Deserialize)]
struct ResetQuery {
    #[serde(default)]
    token: String,
}

#[function_component(ResetPassword)]
pub fn reset_password() -> Html {
    let form = use_state(ResetPasswordForm::default);
    let errors = use_state(FieldErrors::new);
    let loading = use_state(|| false);
    let services = use_services();
    let toast = use_toast();
    let navigator = use_navigator();
    let token = use_location()
        .and_then(|location| location.query::<ResetQuery>().ok())
        .unwrap_or_default()
        .token;

    let onpassword = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(ResetPasswordForm {
                password: e.target_unchecked_into::<HtmlInputElement>().value(),
                ..(*form).clone()
            });
        })
    };

    let onconfirm = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(ResetPasswordForm {
                confirm_password: e.target_unchecked_into::<HtmlInputElement>().value(),
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(found) = form.validate().into_result() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());
            loading.set(true);

            let service = services.auth.clone();
            let password = form.password.clone();
            let token = token.clone();
            let loading = loading.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match service.reset_password(&token, &password).await {
                    Ok(response) => {
                        toast.emit(Toast::success(response.message));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(e) => toast.emit(Toast::from_error(&e)),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="auth-page">
            <form class="auth-card" {onsubmit} novalidate=true>
                <h2>{"Choose a new password"}</h2>
                <label for="password">{"New password"}</label>
                <input id="password" type="password" value={form.password.clone()} oninput={onpassword} />
                if !form.password.is_empty() {
                    <span class="strength-label">{format!("Strength: {}", password_strength(&form.password))}</span>
                }
                if let Some(message) = errors.get("password") {
                    <p class="field-error">{message}</p>
                }
                <label for="confirm">{"Confirm password"}</label>
                <input id="confirm" type="password" value={form.confirm_password.clone()} oninput={onconfirm} />
                if let Some(message) = errors.get("confirmPassword") {
                    <p class="field-error">{message}</p>
                }
                <button type="submit" class="btn btn-primary" disabled={*loading}>
                    if *loading { {"Saving..."} } else { {"Reset password"} }
                </button>
            </form>
        </div>
    }
}
