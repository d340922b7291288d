use contracts::system::users::User;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
}

/// The persisted user roster, shared with the admin page.
#[derive(Clone, Copy)]
pub struct UserRoster(pub RwSignal<Vec<User>>);

impl UserRoster {
    pub fn save(&self) {
        self.0.with_untracked(|users| storage::save_users(users));
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let roster = UserRoster(RwSignal::new(storage::load_users()));

    // Restore session from localStorage on mount
    let restored = storage::get_session().and_then(|id| {
        roster
            .0
            .with_untracked(|users| users.iter().find(|u| u.id == id).cloned())
    });
    let (auth_state, set_auth_state) = signal(AuthState { user: restored });

    provide_context(auth_state);
    provide_context(set_auth_state);
    provide_context(roster);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub fn use_roster() -> UserRoster {
    use_context::<UserRoster>().expect("AuthProvider not found in component tree")
}

/// Log in by access code. The roster is the only credential store.
pub fn do_login(
    access_code: &str,
    roster: UserRoster,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let user = roster
        .0
        .with_untracked(|users| users.iter().find(|u| u.access_code == access_code).cloned())
        .ok_or_else(|| "Kode akses salah.".to_string())?;

    storage::save_session(&user.id);
    set_auth_state.set(AuthState { user: Some(user) });
    Ok(())
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
