use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TOAST_LIFETIME_MS;
use crate::forms::{Notice, NoticeVariant};

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
        }
        Rc::new(Self { toasts })
    }
}

/// Handle for showing notifications, provided through context.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    push: Callback<Notice>,
}

impl Toaster {
    pub fn push(&self, notice: Notice) {
        self.push.emit(notice);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u32);

    let toaster = {
        let dispatcher = list.dispatcher();
        let push = Callback::from(move |notice: Notice| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            dispatcher.dispatch(ToastAction::Push(Toast { id, notice }));

            let dispatcher = dispatcher.clone();
            Timeout::new(TOAST_LIFETIME_MS, move || {
                dispatcher.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        });
        use_memo(|_| Toaster { push }, ())
    };

    let dismiss = {
        let dispatcher = list.dispatcher();
        move |id: u32| {
            let dispatcher = dispatcher.clone();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
        }
    };

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            { for props.children.iter() }
            <style>
                {r#"
                    .toast-stack {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 6.5rem;
                        z-index: 60;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        max-width: 380px;
                    }
                    .toast {
                        background: rgba(17, 17, 19, 0.95);
                        border: 1px solid #1F1F1F;
                        border-radius: 12px;
                        padding: 1rem 1.25rem;
                        color: #F1F1F1;
                        cursor: pointer;
                        box-shadow: 0 12px 32px rgba(0, 0, 0, 0.5);
                    }
                    .toast.destructive {
                        border-color: #B4202A;
                        background: rgba(60, 12, 16, 0.95);
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        font-size: 0.9rem;
                        color: #D1D5DB;
                    }
                "#}
            </style>
            <div class="toast-stack" aria-live="polite">
                { for list.toasts.iter().map(|toast| {
                    let destructive = toast.notice.variant == NoticeVariant::Destructive;
                    html! {
                        <div
                            key={toast.id}
                            class={classes!("toast", destructive.then(|| "destructive"))}
                            role={if destructive { "alert" } else { "status" }}
                            onclick={dismiss(toast.id)}
                        >
                            <div class="toast-title">{toast.notice.title.clone()}</div>
                            <div class="toast-description">{toast.notice.description.clone()}</div>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}
