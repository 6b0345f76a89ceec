use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use shared::validation::ForgotPasswordForm;

use crate::components::common_toast::{use_toast, Toast};
use crate::services::use_services;
use crate::Route;

#[function_component(ForgotPassword)]
pub fn forgot_password() -> Html {
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let sent_to = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let services = use_services();
    let toast = use_toast();

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let error = error.clone();
        let sent_to = sent_to.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = ForgotPasswordForm {
                email: (*email).clone(),
            };
            if let Some(message) = form.validate().get("email") {
                error.set(Some(message.to_string()));
                return;
            }
            error.set(None);
            loading.set(true);

            let service = services.auth.clone();
            let sent_to = sent_to.clone();
            let loading = loading.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let result = service.forgot_password(&form.email).await;
                match result {
                    Ok(_) => sent_to.set(Some(form.email)),
                    Err(e) => toast.emit(Toast::from_error(&e)),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="auth-page">
            if let Some(address) = &*sent_to {
                <div class="auth-card">
                    <h2>{"Check your inbox"}</h2>
                    <p>{format!("We sent a password reset link to {}.", address)}</p>
                    <Link<Route> to={Route::Login}>{"Back to login"}</Link<Route>>
                </div>
            } else {
                <form class="auth-card" {onsubmit} novalidate=true>
                    <h2>{"Reset your password"}</h2>
                    <p>{"Enter the email you signed up with and we'll send you a reset link."}</p>
                    <label for="email">{"Email address"}</label>
                    <input id="email" type="email" value={(*email).clone()} {oninput} />
                    if let Some(message) = &*error {
                        <p class="field-error">{message}</p>
                    }
                    <button type="submit" class="btn btn-primary" disabled={*loading}>
                        if *loading { {"Sending..."} } else { {"Send reset link"} }
                    </button>
                    <div class="auth-links">
                        <Link<Route> to={Route::Login}>{"Back to login"}</Link<Route>>
                    </div>
                </form>
            }
        </div>
    }
}
