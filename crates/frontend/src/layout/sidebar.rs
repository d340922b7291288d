//! Sidebar navigation, gated by role for admin-only pages.

use crate::layout::global_context::{ActivePage, AppGlobalContext};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

const PAGES: [ActivePage; 5] = [
    ActivePage::Dashboard,
    ActivePage::Stores,
    ActivePage::Targets,
    ActivePage::Settings,
    ActivePage::Admin,
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (auth_state, _) = use_auth();

    let is_superuser = move || {
        auth_state
            .get()
            .user
            .map(|u| u.is_superuser())
            .unwrap_or(false)
    };

    let items = move || {
        PAGES
            .into_iter()
            .filter(|page| !page.admin_only() || is_superuser())
            .map(|page| {
                let is_active = move || ctx.active_page.get() == page;
                view! {
                    <button
                        class=move || {
                            if is_active() {
                                "sidebar__item sidebar__item--active"
                            } else {
                                "sidebar__item"
                            }
                        }
                        on:click=move |_| ctx.open_page(page)
                    >
                        <span class="sidebar__item-icon">{icon(page.icon_name())}</span>
                        <span class="sidebar__item-label">{page.label()}</span>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <aside class=move || {
            if ctx.sidebar_open.get() {
                "sidebar"
            } else {
                "sidebar sidebar--collapsed"
            }
        }>
            <nav class="sidebar__nav">{items}</nav>
        </aside>
    }
}
