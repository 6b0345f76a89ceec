use gloo_timers::callback::Timeout;
use shared::SharedError;
use uuid::Uuid;
use yew::prelude::*;

const DEFAULT_DURATION_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

impl ToastType {
    fn class(&self) -> &'static str {
        match self {
            ToastType::Success => "toast-success",
            ToastType::Error => "toast-error",
            ToastType::Info => "toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration_ms: u32,
}

impl Toast {
    fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Info)
    }

    pub fn from_error(err: &SharedError) -> Self {
        Self::error(err.user_message())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    let remove_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: Uuid| toasts.dispatch(ToastAction::Remove(id)))
    };

    let add_toast = {
        let toasts = toasts.clone();
        let remove_toast = remove_toast.clone();
        Callback::from(move |toast: Toast| {
            let id = toast.id;
            let remove_toast = remove_toast.clone();
            Timeout::new(toast.duration_ms, move || remove_toast.emit(id)).forget();
            toasts.dispatch(ToastAction::Add(toast));
        })
    };

    let context = ToastContext {
        toasts: toasts.items.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context.clone()}>
            {props.children.clone()}
            <div class="toast-stack" role="status">
                {for context.toasts.iter().map(|toast| {
                    let on_close = {
                        let remove = context.remove_toast.clone();
                        let id = toast.id;
                        Callback::from(move |_: MouseEvent| remove.emit(id))
                    };
                    html! {
                        <div key={toast.id.to_string()} class={classes!("toast", toast.toast_type.class())}>
                            <span class="toast-message">{&toast.message}</span>
                            <button class="toast-close" onclick={on_close} aria-label="Dismiss">{"×"}</button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Default, PartialEq)]
struct ToastList {
    items: Vec<Toast>,
}

enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Add(toast) => items.push(toast),
            ToastAction::Remove(id) => items.retain(|t| t.id != id),
        }
        std::rc::Rc::new(Self { items })
    }
}

#[hook]
pub fn use_toast() -> Callback<Toast> {
    use_context::<ToastContext>()
        .expect("Toast context not found")
        .add_toast
}
