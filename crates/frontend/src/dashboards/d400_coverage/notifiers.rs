//! Background notifiers for the coverage dashboard.
//!
//! Both run as effects over the app state and use one-shot localStorage
//! markers so a toast fires at most once per (event, user).

use crate::shared::data::local_db;
use crate::shared::notifications::{NotificationKind, Notifications};
use crate::shared::state::app_state::AppState;
use chrono::Utc;
use contracts::dashboards::d400_coverage::engine;
use leptos::prelude::*;

const DEADLINE_THRESHOLDS: [i64; 3] = [7, 3, 1];

/// Warn when the Drive deadline is 7 / 3 / 1 days away.
pub fn run_deadline_notifier(state: AppState, notifications: Notifications) {
    Effect::new(move |_| {
        let deadline = state.settings.with(|s| s.deadline);
        let today = Utc::now().date_naive();

        // Days until the end of the deadline day; negative means passed
        let days_remaining = (deadline - today).num_days();
        if days_remaining < 0 {
            return;
        }

        for threshold in DEADLINE_THRESHOLDS {
            if days_remaining < threshold {
                let marker = format!("notification-shown-{}-{}-days", deadline, threshold);
                if local_db::marker_present(&marker) {
                    continue;
                }
                let when = if days_remaining == 0 {
                    "hari ini".to_string()
                } else {
                    format!("{} hari", days_remaining + 1)
                };
                notifications.push(
                    NotificationKind::Warning,
                    "Tenggat Waktu Mendekat!",
                    &format!(
                        "Target Distribusi Drive akan berakhir dalam {}. Ayo semangat!",
                        when
                    ),
                );
                local_db::set_marker(&marker);
            }
        }
    });
}

/// Congratulate once per (product, user) when its total target is reached.
pub fn run_target_completion_notifier(
    state: AppState,
    notifications: Notifications,
    user_id: String,
) {
    Effect::new(move |_| {
        let products = state.products.get();
        let stores = state.stores.get();
        let sales = state.sales.get();

        if products.is_empty() || stores.is_empty() {
            return;
        }

        for product in products.iter().filter(|p| p.is_active) {
            let marker = format!(
                "notification-shown-target-completed-{}-{}",
                product.to_string_id(),
                user_id
            );
            if local_db::marker_present(&marker) {
                continue;
            }

            let coverage = engine::product_coverage(product, &stores, &sales);
            if !coverage.has_target() || !coverage.is_met() {
                continue;
            }

            notifications.push(
                NotificationKind::Success,
                "Target Tercapai!",
                &format!(
                    "Produk \"{}\" telah mencapai target penjualan. Kerja bagus!",
                    product.base.name
                ),
            );
            local_db::set_marker(&marker);
        }
    });
}
