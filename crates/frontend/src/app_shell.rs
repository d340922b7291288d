//! Application shell: auth gate plus the main layout.

use crate::dashboards::d400_coverage::notifiers;
use crate::dashboards::d400_coverage::ui::dashboard::DashboardPage;
use crate::domain::a001_store::ui::list::StoresPage;
use crate::domain::a002_product::ui::list::TargetsPage;
use crate::layout::global_context::{ActivePage, AppGlobalContext};
use crate::layout::Shell;
use crate::shared::notifications::{NotificationCenter, Notifications};
use crate::shared::state::app_state::AppState;
use crate::system::auth::context::use_auth;
use crate::system::pages::admin::AdminPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::settings::SettingsPage;
use contracts::system::users::User;
use leptos::prelude::*;

/// Main application layout for a logged-in user.
///
/// Re-created from scratch on every login so that `AppState` is always
/// loaded for the right storage scope.
#[component]
fn MainLayout(user: User) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let state = AppState::load_for_user(&user.id);
    provide_context(state);

    let is_superuser = user.is_superuser();

    ctx.init_router_integration();
    // The query string (or a previous session) may point at a page this
    // role is not allowed to see
    let restored = ctx.active_page.get_untracked();
    if restored.for_role(is_superuser) != restored {
        ctx.active_page.set(ActivePage::Dashboard);
    }

    let notifications = use_context::<Notifications>().expect("Notifications context not found");
    notifiers::run_deadline_notifier(state, notifications);
    notifiers::run_target_completion_notifier(state, notifications, user.id.clone());

    view! {
        <Shell content=move || {
            match ctx.active_page.get().for_role(is_superuser) {
                ActivePage::Dashboard => view! { <DashboardPage /> }.into_any(),
                ActivePage::Stores => view! { <StoresPage /> }.into_any(),
                ActivePage::Targets => view! { <TargetsPage /> }.into_any(),
                ActivePage::Settings => view! { <SettingsPage /> }.into_any(),
                ActivePage::Admin => view! { <AdminPage /> }.into_any(),
            }
        } />
    }
}

/// Application shell - auth gate component.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <NotificationCenter />
        {move || match auth_state.get().user {
            Some(user) => view! { <MainLayout user=user /> }.into_any(),
            None => view! { <LoginPage /> }.into_any(),
        }}
    }
}
