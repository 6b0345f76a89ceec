use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use shared::validation::{FieldErrors, PasswordChecklist, SignupForm};

use crate::auth::{use_auth, SignupDetails};
use crate::Route;

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Password,
    Confirm,
}

#[function_component(Signup)]
pub fn signup() -> Html {
    let form = use_state(SignupForm::default);
    let errors = use_state(FieldErrors::new);
    let auth = use_auth();

    let oninput = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            match field {
                Field::Name => next.name = value,
                Field::Email => next.email = value,
                Field::Password => next.password = value,
                Field::Confirm => next.confirm_password = value,
            }
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let auth = auth.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate().into_result() {
                Ok(()) => {
                    errors.set(FieldErrors::new());
                    auth.signup.emit(SignupDetails {
                        name: form.name.trim().to_string(),
                        email: form.email.clone(),
                        password: form.password.clone(),
                    });
                }
                Err(found) => errors.set(found),
            }
        })
    };

    let checklist = PasswordChecklist::evaluate(&form.password);
    let strength = checklist.strength();
    let loading = auth.state.loading;

    let field_error = |field: &str| {
        errors
            .get(field)
            .map(|message| html! { <p class="field-error">{message}</p> })
    };

    html! {
        <div class="auth-page">
            <form class="auth-card" {onsubmit} novalidate=true>
                <h2>{"Create your creator account"}</h2>

                <label for="name">{"Name"}</label>
                <input id="name" value={form.name.clone()} oninput={oninput(Field::Name)} />
                {for field_error("name")}

                <label for="email">{"Email address"}</label>
                <input id="email" type="email" value={form.email.clone()} oninput={oninput(Field::Email)} />
                {for field_error("email")}

                <label for="password">{"Password"}</label>
                <input id="password" type="password" value={form.password.clone()} oninput={oninput(Field::Password)} />
                if !form.password.is_empty() {
                    <div class={classes!("strength", strength.as_str())}>
                        <span class="strength-label">{format!("Strength: {}", strength)}</span>
                        <ul class="strength-checklist">
                            <li class={classes!(checklist.min_length.then_some("met"))}>{"At least 8 characters"}</li>
                            <li class={classes!(checklist.uppercase.then_some("met"))}>{"An uppercase letter"}</li>
                            <li class={classes!(checklist.lowercase_or_number.then_some("met"))}>{"A lowercase letter or number"}</li>
                            <li class={classes!(checklist.special.then_some("met"))}>{"A special character"}</li>
                        </ul>
                    </div>
                }
                {for field_error("password")}

                <label for="confirm">{"Confirm password"}</label>
                <input id="confirm" type="password" value={form.confirm_password.clone()} oninput={oninput(Field::Confirm)} />
                {for field_error("confirmPassword")}

                if let Some(message) = &auth.state.error {
                    <p class="form-error">{message}</p>
                }
                <button type="submit" class="btn btn-primary" disabled={loading}>
                    if loading { {"Creating account..."} } else { {"Sign up"} }
                </button>
                <div class="auth-links">
                    <Link<Route> to={Route::Login}>{"Already have an account? Log in"}</Link<Route>>
                </div>
            </form>
        </div>
    }
}
