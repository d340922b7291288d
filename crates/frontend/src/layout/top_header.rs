use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (auth_state, set_auth_state) = use_auth();

    let user_name = move || {
        auth_state
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_default()
    };

    view! {
        <header class="top-header">
            <div class="top-header__left">
                <button
                    class="button button--icon"
                    title="Toggle sidebar"
                    on:click=move |_| ctx.toggle_sidebar()
                >
                    {icon("menu")}
                </button>
                <h1 class="top-header__title">"Sales Monitor"</h1>
            </div>
            <div class="top-header__right">
                <span class="top-header__user">{user_name}</span>
                <button
                    class="button button--icon"
                    title="Keluar"
                    on:click=move |_| do_logout(set_auth_state)
                >
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
