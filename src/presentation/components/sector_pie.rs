use leptos::*;

use crate::domain::chart::pie_slices;
use crate::domain::stock::services::SectorSlice;

const SIZE: f64 = 220.0;

/// Distribution of the given records across GICS sectors.
#[component]
pub fn SectorPie(slices: Vec<SectorSlice>) -> impl IntoView {
    let radius = SIZE / 2.0 - 10.0;
    let wedges = pie_slices(&slices, SIZE / 2.0, SIZE / 2.0, radius);

    let legend = slices
        .iter()
        .zip(wedges.iter())
        .map(|(slice, wedge)| {
            view! {
                <li>
                    <span class="legend-swatch" style:background=wedge.color></span>
                    {format!(
                        "{} · {} ({:.0}%) · avg YTD {:+.2}%",
                        slice.sector,
                        slice.count,
                        wedge.share * 100.0,
                        slice.average_ytd,
                    )}
                </li>
            }
        })
        .collect_view();

    let paths = wedges
        .into_iter()
        .map(|wedge| {
            view! {
                <path d=wedge.path fill=wedge.color stroke="#fff" stroke-width="1">
                    <title>{wedge.sector}</title>
                </path>
            }
        })
        .collect_view();

    view! {
        <div class="sector-pie">
            <svg viewBox=format!("0 0 {SIZE} {SIZE}") width=SIZE height=SIZE>{paths}</svg>
            <ul class="pie-legend">{legend}</ul>
        </div>
    }
}
