//! In-app toast queue.
//!
//! Notifications auto-dismiss after 8 seconds but can be closed earlier.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

const AUTO_DISMISS_MS: u32 = 8_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "toast toast--info",
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Warning => "toast toast--warning",
            NotificationKind::Error => "toast toast--error",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            _ => "alert-triangle",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<Vec<Notification>>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    pub fn push(&self, kind: NotificationKind, title: &str, message: &str) {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            title: title.to_string(),
            message: message.to_string(),
        };
        let id = notification.id;
        self.items.update(|items| items.push(notification));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NotificationCenter() -> impl IntoView {
    let notifications =
        use_context::<Notifications>().expect("Notifications context not found");

    view! {
        <div class="toast-stack">
            <For
                each=move || notifications.items.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.css_class()>
                            <span class="toast__icon">{icon(n.kind.icon_name())}</span>
                            <div class="toast__body">
                                <p class="toast__title">{n.title.clone()}</p>
                                <p class="toast__message">{n.message.clone()}</p>
                            </div>
                            <button
                                class="button button--icon toast__close"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
