use crate::services::use_services;
use log::{debug, error};
use shared::{ThemePreference, ThemeState};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeContext {
    pub preference: ThemePreference,
    pub toggle: Callback<()>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let services = use_services();
    let state = use_mut_ref(|| ThemeState::hydrate(services.storage.clone()));
    let preference = use_state(|| state.borrow().preference());

    let toggle = {
        let state = state.clone();
        let preference = preference.clone();
        Callback::from(move |_: ()| {
            let result = state.borrow_mut().toggle();
            match result {
                Ok(next) => {
                    debug!("Theme switched to {}", next);
                    preference.set(next);
                }
                Err(e) => error!("Failed to persist theme: {}", e),
            }
        })
    };

    let context = ThemeContext {
        preference: *preference,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            <div class={classes!("theme-root", preference.as_str())}>
                {props.children.clone()}
            </div>
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("Theme context not found")
}
