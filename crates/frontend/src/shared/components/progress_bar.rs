use leptos::prelude::*;

/// Horizontal progress bar, `value` out of `max`.
#[component]
pub fn ProgressBar(
    #[prop(into)] value: Signal<u32>,
    #[prop(into)] max: Signal<u32>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let percent = move || {
        let max = max.get();
        if max == 0 {
            0.0
        } else {
            (value.get() as f64 / max as f64 * 100.0).min(100.0)
        }
    };

    let label_view = label.map(|text| {
        view! {
            <div class="progress-bar__label">
                <span>{text}</span>
                <span>{move || format!("{} / {}", value.get(), max.get())}</span>
            </div>
        }
    });

    view! {
        <div class="progress-bar">
            {label_view}
            <div class="progress-bar__track">
                <div
                    class="progress-bar__fill"
                    style=move || format!("width: {:.1}%", percent())
                ></div>
            </div>
        </div>
    }
}
