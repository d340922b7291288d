use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::notifications::Notifications;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Toast queue, shared by pages and background notifiers
    provide_context(Notifications::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
