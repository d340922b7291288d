//! Weekly visit planning: Mon..Sat day cards, the per-day plan editor and
//! the filtered store card grid.

use super::store_card::StoreCard;
use crate::shared::components::Modal;
use crate::shared::date_utils::{day_name, working_week};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput};
use crate::shared::notifications::{NotificationKind, Notifications};
use crate::shared::state::app_state::AppState;
use chrono::{Datelike, Utc};
use contracts::dashboards::d400_coverage::{engine, StoreProgressFilter};
use contracts::domain::a001_store::StoreId;
use contracts::enums::StoreLevel;
use leptos::prelude::*;

#[component]
fn DailyPlanEditModal(day: u8, on_close: Callback<()>) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context not found");
    let notifications = use_context::<Notifications>().expect("Notifications context not found");

    let (filter, set_filter) = signal(String::new());
    let selected = RwSignal::new(
        state
            .visit_plan
            .with_untracked(|plan| plan.stores_for_day(day).to_vec()),
    );

    let toggle_store = move |store_id: StoreId| {
        selected.update(|ids| {
            if let Some(pos) = ids.iter().position(|id| *id == store_id) {
                ids.remove(pos);
            } else {
                ids.push(store_id);
            }
        });
    };

    let visible_stores = move || {
        let mut stores = filter_list(state.stores.get(), &filter.get());
        stores.sort_by(|a, b| {
            a.base
                .name
                .to_lowercase()
                .cmp(&b.base.name.to_lowercase())
        });
        stores
    };

    let on_save = move |_| {
        state.set_day_plan(day, selected.get_untracked());
        notifications.push(
            NotificationKind::Success,
            "Rencana Kunjungan",
            &format!("Rencana kunjungan {} disimpan.", day_name(day)),
        );
        on_close.run(());
    };

    view! {
        <Modal
            title=format!("Rencana Kunjungan: {}", day_name(day))
            on_close=on_close
        >
            <SearchInput
                value=filter
                on_change=Callback::new(move |value| set_filter.set(value))
                placeholder="Cari nama toko..."
            />

            <div class="plan-editor__list">
                <For
                    each=visible_stores
                    key=|store| store.base.id
                    children=move |store| {
                        let store_id = store.base.id;
                        view! {
                            <label class="plan-editor__row">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        selected.with(|ids| ids.contains(&store_id))
                                    }
                                    on:change=move |_| toggle_store(store_id)
                                />
                                <span>{store.base.name.clone()}</span>
                                <span class="plan-editor__level">{store.level.to_string()}</span>
                            </label>
                        }
                    }
                />
            </div>

            <Show when=move || visible_stores().is_empty()>
                <p class="empty-state">"Belum ada toko yang cocok."</p>
            </Show>

            <div class="form-actions">
                <span class="plan-editor__count">
                    {move || format!("{} toko dipilih", selected.with(Vec::len))}
                </span>
                <button type="button" class="button" on:click=move |_| on_close.run(())>
                    "Batal"
                </button>
                <button type="button" class="button button--primary" on:click=on_save>
                    "Simpan"
                </button>
            </div>
        </Modal>
    }
}

#[component]
pub fn VisitPanel() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context not found");

    let today = Utc::now().date_naive();
    let week = working_week(today);
    let today_day = today.weekday().number_from_monday() as u8;

    let selected_day = RwSignal::new(Option::<u8>::None);
    let (plan_modal_open, set_plan_modal_open) = signal(false);

    let (filter, set_filter) = signal(String::new());
    let progress_filter = RwSignal::new(StoreProgressFilter::All);
    let selected_levels = RwSignal::new(Vec::<StoreLevel>::new());

    let toggle_day = move |day: u8| {
        selected_day.update(|current| {
            *current = if *current == Some(day) { None } else { Some(day) };
        });
    };

    let toggle_level = move |level: StoreLevel| {
        selected_levels.update(|levels| {
            if let Some(pos) = levels.iter().position(|l| *l == level) {
                levels.remove(pos);
            } else {
                levels.push(level);
            }
        });
    };

    // Store cards after the day plan and all three filters are applied.
    let visible_stores = move || {
        let mut stores = state.stores.get();

        if let Some(day) = selected_day.get() {
            let planned = state
                .visit_plan
                .with(|plan| plan.stores_for_day(day).to_vec());
            stores.retain(|store| planned.contains(&store.base.id));
        }

        let levels = selected_levels.get();
        if !levels.is_empty() {
            stores.retain(|store| levels.contains(&store.level));
        }

        let mut stores = filter_list(stores, &filter.get());

        let progress = progress_filter.get();
        if progress != StoreProgressFilter::All {
            let products = state.products.get();
            let sales = state.sales.get();
            stores.retain(|store| {
                progress.matches(&engine::store_progress(store.base.id, &products, &sales))
            });
        }

        stores.sort_by(|a, b| {
            a.base
                .name
                .to_lowercase()
                .cmp(&b.base.name.to_lowercase())
        });
        stores
    };

    let empty_message = move || {
        if state.stores.with(Vec::is_empty) {
            "Belum ada toko. Tambahkan toko di halaman Toko terlebih dahulu."
        } else if selected_day
            .get()
            .map(|day| state.visit_plan.with(|plan| plan.store_count(day)) == 0)
            .unwrap_or(false)
        {
            "Belum ada rencana kunjungan untuk hari ini. Klik \"Atur Rencana\" untuk memilih toko."
        } else {
            "Tidak ada toko yang cocok dengan filter."
        }
    };

    let day_cards = week
        .into_iter()
        .enumerate()
        .map(|(i, date)| {
            let day = (i + 1) as u8;
            let card_class = move || {
                let mut class = String::from("day-card");
                if day == today_day {
                    class.push_str(" day-card--today");
                }
                if selected_day.get() == Some(day) {
                    class.push_str(" day-card--selected");
                }
                class
            };
            view! {
                <button class=card_class on:click=move |_| toggle_day(day)>
                    <span class="day-card__name">{day_name(day)}</span>
                    <span class="day-card__date">{date.day()}</span>
                    <span class="day-card__count">
                        {move || {
                            format!("{} Toko", state.visit_plan.with(|plan| plan.store_count(day)))
                        }}
                    </span>
                </button>
            }
        })
        .collect_view();

    let filter_options = [
        (StoreProgressFilter::All, "Semua Progres"),
        (StoreProgressFilter::NeedsAttention, "Perlu Perhatian"),
        (StoreProgressFilter::Completed, "Selesai"),
    ];

    let level_chips = StoreLevel::all()
        .into_iter()
        .map(|level| {
            view! {
                <button
                    class=move || {
                        if selected_levels.get().contains(&level) {
                            "chip chip--active"
                        } else {
                            "chip"
                        }
                    }
                    on:click=move |_| toggle_level(level)
                >
                    {level.to_string()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="visit-panel">
            <div class="visit-panel__header">
                <h3 class="section-title">
                    {icon("calendar")}
                    "Rencana Kunjungan Harian"
                </h3>
                <Show when=move || selected_day.get().is_some()>
                    <button
                        class="button button--primary"
                        on:click=move |_| set_plan_modal_open.set(true)
                    >
                        "Atur Rencana"
                    </button>
                </Show>
            </div>

            <div class="day-cards">{day_cards}</div>

            {move || match (plan_modal_open.get(), selected_day.get()) {
                (true, Some(day)) => view! {
                    <DailyPlanEditModal
                        day=day
                        on_close=Callback::new(move |_| set_plan_modal_open.set(false))
                    />
                }
                .into_any(),
                _ => ().into_any(),
            }}

            <div class="filter-panel">
                <h4 class="filter-panel__title">
                    {icon("filter")}
                    "Filter Cerdas"
                </h4>
                <SearchInput
                    value=filter
                    on_change=Callback::new(move |value| set_filter.set(value))
                    placeholder="Cari nama toko..."
                />
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let chosen = filter_options
                            .iter()
                            .find(|(_, label)| *label == value)
                            .map(|(option, _)| *option)
                            .unwrap_or_default();
                        progress_filter.set(chosen);
                    }
                >
                    {filter_options
                        .iter()
                        .map(|(option, label)| {
                            let option = *option;
                            view! {
                                <option
                                    value=*label
                                    selected=move || progress_filter.get() == option
                                >
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <div class="filter-panel__chips">
                    <span class="filter-panel__label">"Level Toko:"</span>
                    {level_chips}
                    <Show when=move || !selected_levels.get().is_empty()>
                        <button
                            class="button button--icon"
                            title="Reset filter level"
                            on:click=move |_| selected_levels.set(Vec::new())
                        >
                            {icon("x")}
                        </button>
                    </Show>
                </div>
            </div>

            <div class="store-card-grid">
                <For
                    each=visible_stores
                    key=|store| store.base.id
                    children=move |store| view! { <StoreCard store=store /> }
                />
            </div>

            <Show when=move || visible_stores().is_empty()>
                <p class="empty-state">{empty_message}</p>
            </Show>
        </div>
    }
}
