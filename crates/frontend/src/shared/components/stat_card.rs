use contracts::dashboards::d400_coverage::Trend;
use leptos::prelude::*;

/// Weekly stat with a delta against the previous week.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    title: String,
    #[prop(into)] value: Signal<u32>,
    /// Change vs the previous week
    #[prop(into)] delta: Signal<i64>,
) -> impl IntoView {
    let delta_view = move || {
        let delta = delta.get();
        let (arrow, cls) = match Trend::from_delta(delta) {
            Trend::Up => ("\u{2191}", "stat-card__change stat-card__change--up"),
            Trend::Down => ("\u{2193}", "stat-card__change stat-card__change--down"),
            Trend::Flat => ("", "stat-card__change stat-card__change--flat"),
        };
        let text = if delta == 0 {
            "-".to_string()
        } else if delta > 0 {
            format!("{}+{}", arrow, delta)
        } else {
            format!("{}{}", arrow, delta)
        };
        view! { <span class=cls>{text}</span> }
    };

    view! {
        <div class="stat-card">
            <h4 class="stat-card__label">{title}</h4>
            <div class="stat-card__row">
                <p class="stat-card__value">{move || value.get()}</p>
                {delta_view}
            </div>
            <p class="stat-card__footnote">"vs minggu lalu"</p>
        </div>
    }
}
