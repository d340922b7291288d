use crate::shared::date_utils;
use crate::shared::icons::icon;
use crate::shared::notifications::{NotificationKind, Notifications};
use crate::shared::state::app_state::AppState;
use contracts::enums::StoreLevel;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context not found");
    let notifications = use_context::<Notifications>().expect("Notifications context not found");

    // Editable copy, committed on save
    let form = RwSignal::new(state.settings.get_untracked());

    let on_discount_input = move |level: StoreLevel, raw: String| {
        let value = raw.parse::<f64>().unwrap_or(0.0);
        form.update(|settings| {
            settings.discounts.insert(level, value);
        });
    };

    let on_deadline_input = move |raw: String| {
        if let Some(date) = date_utils::from_input_value(&raw) {
            form.update(|settings| settings.deadline = date);
        }
    };

    let on_save = move |_| {
        match state.update_settings(form.get_untracked()) {
            Ok(()) => notifications.push(
                NotificationKind::Success,
                "Tersimpan",
                "Pengaturan berhasil disimpan.",
            ),
            Err(e) => notifications.push(NotificationKind::Error, "Gagal menyimpan", &e),
        }
    };

    let on_backup = move |_| {
        match state.backup() {
            Ok(()) => notifications.push(
                NotificationKind::Success,
                "Backup",
                "Backup data berhasil diunduh.",
            ),
            Err(e) => notifications.push(NotificationKind::Error, "Backup gagal", &e),
        }
    };

    let on_restore_file = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(file) = input.and_then(|i| i.files()).and_then(|f| f.get(0)) else {
            return;
        };

        spawn_local(async move {
            let text = match JsFuture::from(file.text()).await {
                Ok(value) => value.as_string().unwrap_or_default(),
                Err(e) => {
                    notifications.push(
                        NotificationKind::Error,
                        "Restore gagal",
                        &format!("Gagal membaca file: {:?}", e),
                    );
                    return;
                }
            };
            match state.restore(&text) {
                Ok(()) => {
                    form.set(state.settings.get_untracked());
                    notifications.push(
                        NotificationKind::Success,
                        "Restore",
                        "Data berhasil dipulihkan.",
                    );
                }
                Err(e) => notifications.push(NotificationKind::Error, "Restore gagal", &e),
            }
        });
    };

    let on_reset = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(
                    "YAKIN ingin mereset seluruh data aplikasi? \
                     SEMUA progres akan hilang dan tidak bisa dibatalkan.",
                )
                .ok()
            })
            .unwrap_or(false);
        if confirmed {
            state.reset();
            form.set(state.settings.get_untracked());
            notifications.push(NotificationKind::Warning, "Reset", "Aplikasi berhasil direset.");
        }
    };

    let discount_rows = StoreLevel::all()
        .into_iter()
        .map(|level| {
            view! {
                <div class="form-group">
                    <label>{format!("Diskon {} (%)", level)}</label>
                    <input
                        type="number"
                        min="0"
                        step="0.05"
                        prop:value=move || {
                            form.with(|s| s.discount_for(level).to_string())
                        }
                        on:input=move |ev| on_discount_input(level, event_target_value(&ev))
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <h2 class="page__title">"Pengaturan"</h2>

            <section class="card">
                <h3 class="card__title">"Diskon per Level Toko"</h3>
                <div class="settings-grid">{discount_rows}</div>
            </section>

            <section class="card">
                <h3 class="card__title">"Tenggat Distribusi Drive"</h3>
                <div class="form-group">
                    <label for="deadline">"Tanggal Berakhir"</label>
                    <input
                        type="date"
                        id="deadline"
                        prop:value=move || form.with(|s| date_utils::to_input_value(s.deadline))
                        on:input=move |ev| on_deadline_input(event_target_value(&ev))
                    />
                </div>
                <button class="button button--primary" on:click=on_save>
                    "Simpan Pengaturan"
                </button>
            </section>

            <section class="card">
                <h3 class="card__title">"Manajemen Data"</h3>
                <div class="settings-actions">
                    <button class="button" on:click=on_backup>
                        {icon("download")}
                        "Backup Data"
                    </button>
                    <label class="button">
                        {icon("upload")}
                        "Restore Data"
                        <input
                            type="file"
                            accept="application/json"
                            style="display: none;"
                            on:change=on_restore_file
                        />
                    </label>
                    <button class="button button--danger" on:click=on_reset>
                        {icon("trash")}
                        "Reset Aplikasi"
                    </button>
                </div>
            </section>
        </div>
    }
}
