use crate::services::use_services;
use log::{debug, error};
use shared::{Session, User, UserUpdate};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    Started,
    SignedIn(User),
    Failed(String),
    SignedOut,
    UserUpdated(User),
    ClearError,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Started => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::SignedIn(user) => Rc::new(Self {
                user: Some(user),
                loading: false,
                error: None,
            }),
            AuthAction::Failed(error) => Rc::new(Self {
                loading: false,
                error: Some(error),
                ..(*self).clone()
            }),
            AuthAction::SignedOut => Rc::new(Self::default()),
            AuthAction::UserUpdated(user) => Rc::new(Self {
                user: Some(user),
                ..(*self).clone()
            }),
            AuthAction::ClearError => Rc::new(Self {
                error: None,
                ..(*self).clone()
            }),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SignupDetails {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub login: Callback<(String, String)>,
    pub signup: Callback<SignupDetails>,
    pub logout: Callback<()>,
    pub update_user: Callback<UserUpdate>,
    pub clear_error: Callback<()>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let services = use_services();

    // Restore the persisted user before the first render so protected routes
    // do not bounce to /login on reload.
    let auth = {
        let services = services.clone();
        use_reducer_eq(move || {
            let user = match Session::hydrate(services.auth.clone()) {
                Ok(session) => session.user().cloned(),
                Err(e) => {
                    error!("Failed to restore session: {}", e);
                    None
                }
            };
            AuthState {
                user,
                ..Default::default()
            }
        })
    };

    let login = {
        let auth = auth.clone();
        let services = services.clone();
        Callback::from(move |(email, password): (String, String)| {
            let auth = auth.clone();
            let service = services.auth.clone();
            auth.dispatch(AuthAction::Started);
            spawn_local(async move {
                match service.login(&email, &password).await {
                    Ok(response) => auth.dispatch(AuthAction::SignedIn(response.user)),
                    Err(e) => auth.dispatch(AuthAction::Failed(e.user_message())),
                }
            });
        })
    };

    let signup = {
        let auth = auth.clone();
        let services = services.clone();
        Callback::from(move |details: SignupDetails| {
            let auth = auth.clone();
            let service = services.auth.clone();
            auth.dispatch(AuthAction::Started);
            spawn_local(async move {
                match service
                    .signup(&details.name, &details.email, &details.password)
                    .await
                {
                    Ok(response) => auth.dispatch(AuthAction::SignedIn(response.user)),
                    Err(e) => auth.dispatch(AuthAction::Failed(e.user_message())),
                }
            });
        })
    };

    let logout = {
        let auth = auth.clone();
        let services = services.clone();
        Callback::from(move |_: ()| {
            let auth = auth.clone();
            let service = services.auth.clone();
            auth.dispatch(AuthAction::Started);
            spawn_local(async move {
                match service.logout().await {
                    Ok(()) => {
                        debug!("Signed out");
                        auth.dispatch(AuthAction::SignedOut);
                    }
                    Err(e) => auth.dispatch(AuthAction::Failed(e.user_message())),
                }
            });
        })
    };

    let update_user = {
        let auth = auth.clone();
        let services = services.clone();
        Callback::from(move |update: UserUpdate| {
            match services.auth.update_user(update) {
                Ok(user) => auth.dispatch(AuthAction::UserUpdated(user)),
                Err(e) => auth.dispatch(AuthAction::Failed(e.user_message())),
            }
        })
    };

    let clear_error = {
        let auth = auth.clone();
        Callback::from(move |_: ()| auth.dispatch(AuthAction::ClearError))
    };

    let context = AuthContext {
        state: (*auth).clone(),
        login,
        signup,
        logout,
        update_user,
        clear_error,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("Auth context not found")
}
