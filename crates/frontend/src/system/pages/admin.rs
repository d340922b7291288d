//! Superuser page: manage the user roster.

use crate::shared::components::Modal;
use crate::shared::icons::icon;
use crate::shared::notifications::{NotificationKind, Notifications};
use crate::system::auth::context::{use_auth, use_roster};
use contracts::system::users::{validate_access_code, User, UserRole};
use leptos::prelude::*;

#[component]
fn UserForm(
    on_close: Callback<()>,
    #[prop(optional_no_strip)] user_to_edit: Option<User>,
) -> impl IntoView {
    let roster = use_roster();
    let notifications = use_context::<Notifications>().expect("Notifications context not found");

    let editing_id = user_to_edit.as_ref().map(|u| u.id.clone());
    let is_edit = editing_id.is_some();

    let (name, set_name) = signal(
        user_to_edit
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_default(),
    );
    let (access_code, set_access_code) = signal(
        user_to_edit
            .as_ref()
            .map(|u| u.access_code.clone())
            .unwrap_or_default(),
    );
    let (nik, set_nik) = signal(
        user_to_edit
            .as_ref()
            .and_then(|u| u.nik.clone())
            .unwrap_or_default(),
    );
    let (wa_number, set_wa_number) = signal(
        user_to_edit
            .as_ref()
            .and_then(|u| u.wa_number.clone())
            .unwrap_or_default(),
    );
    let (role, set_role) = signal(
        user_to_edit
            .as_ref()
            .map(|u| u.role)
            .unwrap_or(UserRole::User),
    );
    let (error, set_error) = signal(Option::<String>::None);

    let editing_id = StoredValue::new(editing_id);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let code = access_code.get();
        let own_id = editing_id.get_value();
        let valid = roster.0.with_untracked(|users| {
            validate_access_code(&code, users, own_id.as_deref())
        });
        if let Err(e) = valid {
            set_error.set(Some(e));
            return;
        }

        let optional = |s: String| if s.trim().is_empty() { None } else { Some(s) };

        roster.0.update(|users| match editing_id.get_value() {
            Some(id) => {
                if let Some(user) = users.iter_mut().find(|u| u.id == id) {
                    user.name = name.get_untracked();
                    user.access_code = code.clone();
                    user.role = role.get_untracked();
                    user.nik = optional(nik.get_untracked());
                    user.wa_number = optional(wa_number.get_untracked());
                }
            }
            None => {
                let mut user = User::new(name.get_untracked(), code.clone(), role.get_untracked());
                user.nik = optional(nik.get_untracked());
                user.wa_number = optional(wa_number.get_untracked());
                users.push(user);
            }
        });
        roster.save();
        notifications.push(NotificationKind::Success, "User", "User berhasil disimpan.");
        on_close.run(());
    };

    view! {
        <form class="form" on:submit=on_submit>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <div class="form-group">
                <label for="user-name">"Nama"</label>
                <input
                    type="text"
                    id="user-name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    required
                />
            </div>
            <div class="form-group">
                <label for="user-code">"Kode Akses (6 digit)"</label>
                <input
                    type="text"
                    id="user-code"
                    maxlength="6"
                    inputmode="numeric"
                    prop:value=move || access_code.get()
                    on:input=move |ev| set_access_code.set(event_target_value(&ev))
                    required
                />
            </div>
            <div class="form-group">
                <label for="user-nik">"NIK"</label>
                <input
                    type="text"
                    id="user-nik"
                    prop:value=move || nik.get()
                    on:input=move |ev| set_nik.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="user-wa">"No. WhatsApp"</label>
                <input
                    type="text"
                    id="user-wa"
                    prop:value=move || wa_number.get()
                    on:input=move |ev| set_wa_number.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="user-role">"Role"</label>
                <select
                    id="user-role"
                    on:change=move |ev| {
                        let role = match event_target_value(&ev).as_str() {
                            "superuser" => UserRole::Superuser,
                            _ => UserRole::User,
                        };
                        set_role.set(role);
                    }
                >
                    <option value="user" selected=move || role.get() == UserRole::User>
                        "User"
                    </option>
                    <option value="superuser" selected=move || role.get() == UserRole::Superuser>
                        "Superuser"
                    </option>
                </select>
            </div>
            <div class="form-actions">
                <button type="button" class="button" on:click=move |_| on_close.run(())>
                    "Batal"
                </button>
                <button type="submit" class="button button--primary">
                    {if is_edit { "Update" } else { "Tambah" }}
                </button>
            </div>
        </form>
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let roster = use_roster();
    let (auth_state, _) = use_auth();
    let notifications = use_context::<Notifications>().expect("Notifications context not found");

    let (modal_open, set_modal_open) = signal(false);
    let user_to_edit = RwSignal::new(Option::<User>::None);

    let open_modal = move |user: Option<User>| {
        user_to_edit.set(user);
        set_modal_open.set(true);
    };
    let close_modal = Callback::new(move |_: ()| {
        user_to_edit.set(None);
        set_modal_open.set(false);
    });

    let current_user_id = move || auth_state.get().user.map(|u| u.id).unwrap_or_default();

    let delete_user = move |id: String| {
        if id == current_user_id() {
            notifications.push(
                NotificationKind::Warning,
                "User",
                "Tidak bisa menghapus user yang sedang login.",
            );
            return;
        }
        roster.0.update(|users| users.retain(|u| u.id != id));
        roster.save();
    };

    let sorted_users = move || {
        let mut users = roster.0.get();
        users.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        users
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">"Manajemen User"</h2>
                <button class="button button--primary" on:click=move |_| open_modal(None)>
                    {icon("plus")}
                    "Tambah User"
                </button>
            </div>

            <Show when=move || modal_open.get()>
                <Modal
                    title=if user_to_edit.get_untracked().is_some() {
                        "Edit User".to_string()
                    } else {
                        "Tambah User Baru".to_string()
                    }
                    on_close=close_modal
                >
                    <UserForm on_close=close_modal user_to_edit=user_to_edit.get_untracked() />
                </Modal>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Nama"</th>
                        <th>"Kode Akses"</th>
                        <th>"NIK"</th>
                        <th>"WhatsApp"</th>
                        <th>"Role"</th>
                        <th>""</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=sorted_users
                        key=|user| user.id.clone()
                        children=move |user: User| {
                            let edit_user = user.clone();
                            let delete_id = user.id.clone();
                            view! {
                                <tr>
                                    <td>{user.name.clone()}</td>
                                    <td>{user.access_code.clone()}</td>
                                    <td>{user.nik.clone().unwrap_or_else(|| "-".into())}</td>
                                    <td>{user.wa_number.clone().unwrap_or_else(|| "-".into())}</td>
                                    <td>
                                        {if user.is_superuser() { "Superuser" } else { "User" }}
                                    </td>
                                    <td class="data-table__actions">
                                        <button
                                            class="button button--icon"
                                            title="Edit"
                                            on:click=move |_| open_modal(Some(edit_user.clone()))
                                        >
                                            {icon("pencil")}
                                        </button>
                                        <button
                                            class="button button--icon button--danger"
                                            title="Hapus"
                                            on:click=move |_| delete_user(delete_id.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
