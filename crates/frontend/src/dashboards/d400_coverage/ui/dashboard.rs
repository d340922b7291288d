//! Dashboard page: panel switcher over the three coverage views.

use super::performance_panel::PerformancePanel;
use super::targets_panel::TargetsPanel;
use super::visit_panel::VisitPanel;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    VisitDetails,
    PerformanceSummary,
    TargetProgress,
}

const PANELS: [(Panel, &str, &str, &str); 3] = [
    (
        Panel::VisitDetails,
        "Detail Kunjungan",
        "Atur & lihat rencana harian.",
        "calendar",
    ),
    (
        Panel::PerformanceSummary,
        "Ringkasan Performa",
        "Lacak progres & statistik.",
        "bar-chart",
    ),
    (
        Panel::TargetProgress,
        "Progres Target",
        "Pantau sisa waktu & progres target.",
        "pie-chart",
    ),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (active_panel, set_active_panel) = signal(Panel::VisitDetails);

    let panel_buttons = PANELS
        .into_iter()
        .map(|(panel, title, description, icon_name)| {
            view! {
                <button
                    class=move || {
                        if active_panel.get() == panel {
                            "panel-card panel-card--active"
                        } else {
                            "panel-card"
                        }
                    }
                    on:click=move |_| set_active_panel.set(panel)
                >
                    <span class="panel-card__icon">{icon(icon_name)}</span>
                    <h3 class="panel-card__title">{title}</h3>
                    <p class="panel-card__description">{description}</p>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <h2 class="page__title">"Dashboard"</h2>
            <p class="page__subtitle">
                "Pusat kontrol interaktif untuk memantau kinerja penjualan Anda."
            </p>

            <div class="panel-switcher">{panel_buttons}</div>

            <main class="panel-content">
                {move || match active_panel.get() {
                    Panel::VisitDetails => view! { <VisitPanel /> }.into_any(),
                    Panel::PerformanceSummary => view! { <PerformancePanel /> }.into_any(),
                    Panel::TargetProgress => view! { <TargetsPanel /> }.into_any(),
                }}
            </main>
        </div>
    }
}
