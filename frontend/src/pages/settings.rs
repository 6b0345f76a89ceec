use shared::validation::{validate_email, validate_name, FieldErrors};
use shared::{ConnectedAccounts, ThemePreference, UserUpdate};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::auth::use_auth;
use crate::theme::use_theme;

#[derive(Clone, Debug, Default, PartialEq)]
struct ProfileDraft {
    name: String,
    email: String,
    channel_name: String,
}

impl ProfileDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check("name", validate_name(&self.name))
            .check("email", validate_email(&self.email))
            .check(
                "channelName",
                self.channel_name
                    .trim()
                    .is_empty()
                    .then(|| "Channel name is required".to_string()),
            );
        errors
    }
}

#[function_component(Settings)]
pub fn settings() -> Html {
    let auth = use_auth();
    let theme = use_theme();

    let draft = {
        let user = auth.state.user.clone();
        use_state(move || {
            user.map(|u| ProfileDraft {
                name: u.name,
                email: u.email,
                channel_name: u.channel_name,
            })
            .unwrap_or_default()
        })
    };
    let errors = use_state(FieldErrors::new);

    let Some(user) = auth.state.user.clone() else {
        return html! {};
    };

    let on_field = |apply: fn(&mut ProfileDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            apply(&mut next, e.target_unchecked_into::<HtmlInputElement>().value());
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let update_user = auth.update_user.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(found) = draft.validate().into_result() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());
            update_user.emit(UserUpdate {
                name: Some(draft.name.trim().to_string()),
                email: Some(draft.email.trim().to_string()),
                channel_name: Some(draft.channel_name.trim().to_string()),
                ..Default::default()
            });
        })
    };

    let toggle_account = |pick: fn(&mut ConnectedAccounts)| {
        let update_user = auth.update_user.clone();
        let current = user.connected_accounts.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = current.clone();
            pick(&mut next);
            update_user.emit(UserUpdate {
                connected_accounts: Some(next),
                ..Default::default()
            });
        })
    };

    let on_theme = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let accounts = [
        ("YouTube", user.connected_accounts.youtube, toggle_account(|a| a.youtube = !a.youtube)),
        ("Instagram", user.connected_accounts.instagram, toggle_account(|a| a.instagram = !a.instagram)),
        ("TikTok", user.connected_accounts.tiktok, toggle_account(|a| a.tiktok = !a.tiktok)),
    ];

    html! {
        <div class="page settings">
            <header class="page-header">
                <h1>{"Settings"}</h1>
            </header>

            <form class="panel" {onsubmit} novalidate=true>
                <h3>{"Profile"}</h3>
                <label for="name">{"Name"}</label>
                <input id="name" value={draft.name.clone()} oninput={on_field(|d, v| d.name = v)} />
                if let Some(message) = errors.get("name") {
                    <p class="field-error">{message}</p>
                }
                <label for="email">{"Email"}</label>
                <input id="email" type="email" value={draft.email.clone()} oninput={on_field(|d, v| d.email = v)} />
                if let Some(message) = errors.get("email") {
                    <p class="field-error">{message}</p>
                }
                <label for="channel">{"Channel name"}</label>
                <input id="channel" value={draft.channel_name.clone()} oninput={on_field(|d, v| d.channel_name = v)} />
                if let Some(message) = errors.get("channelName") {
                    <p class="field-error">{message}</p>
                }
                if let Some(message) = &auth.state.error {
                    <p class="form-error">{message}</p>
                }
                <button type="submit" class="btn btn-primary">{"Save changes"}</button>
            </form>

            <section class="panel">
                <h3>{"Connected accounts"}</h3>
                <ul class="accounts">
                    {for accounts.into_iter().map(|(label, connected, onclick)| html! {
                        <li>
                            <span>{label}</span>
                            <button class="btn" {onclick}>
                                {if connected { "Disconnect" } else { "Connect" }}
                            </button>
                        </li>
                    })}
                </ul>
            </section>

            <section class="panel">
                <h3>{"Appearance"}</h3>
                <button class="btn" onclick={on_theme}>
                    {match theme.preference {
                        ThemePreference::Light => "Switch to dark mode",
                        ThemePreference::Dark => "Switch to light mode",
                    }}
                </button>
            </section>
        </div>
    }
}
