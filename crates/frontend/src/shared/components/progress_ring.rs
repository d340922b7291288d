use contracts::dashboards::d400_coverage::ProductCoverage;
use leptos::prelude::*;

const SQ_SIZE: f64 = 100.0;
const STROKE_WIDTH: f64 = 12.0;

/// SVG ring gauge for a product coverage.
///
/// The arc is capped at 100% while the centre label shows the raw percent,
/// so over-achievement reads "120%" on a full ring.
#[component]
pub fn ProgressRing(#[prop(into)] coverage: Signal<ProductCoverage>) -> impl IntoView {
    let radius = (SQ_SIZE - STROKE_WIDTH) / 2.0;
    let dash_array = radius * std::f64::consts::PI * 2.0;

    let dash_offset = move || {
        let capped = coverage.get().gauge_percent();
        dash_array - dash_array * capped / 100.0
    };

    let label = move || format!("{:.0}%", coverage.get().display_percent());
    let counts = move || {
        let c = coverage.get();
        format!("{} / {} Toko", c.achieved, c.target)
    };

    view! {
        <div class="progress-ring">
            <svg
                width="100%"
                height="100%"
                viewBox=format!("0 0 {} {}", SQ_SIZE, SQ_SIZE)
            >
                <circle
                    class="progress-ring__track"
                    cx=SQ_SIZE / 2.0
                    cy=SQ_SIZE / 2.0
                    r=radius
                    stroke-width=STROKE_WIDTH
                    fill="transparent"
                />
                <circle
                    class="progress-ring__arc"
                    cx=SQ_SIZE / 2.0
                    cy=SQ_SIZE / 2.0
                    r=radius
                    stroke-width=STROKE_WIDTH
                    fill="transparent"
                    stroke-linecap="round"
                    transform=format!("rotate(-90 {} {})", SQ_SIZE / 2.0, SQ_SIZE / 2.0)
                    stroke-dasharray=dash_array
                    stroke-dashoffset=move || format!("{:.2}", dash_offset())
                />
            </svg>
            <span class="progress-ring__percent">{label}</span>
            <p class="progress-ring__counts">{counts}</p>
        </div>
    }
}
