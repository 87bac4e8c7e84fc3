use leptos::*;
use strum::IntoEnumIterator;

use crate::domain::chart::{
    ChartRenderer, PlotArea, candle_shapes, chart_points, date_ticks, line_paths, price_ticks,
};
use crate::domain::stock::StockRecord;

const PRICE_TICKS: usize = 5;
const DATE_LABELS: usize = 8;

/// Price history as an SVG line or candlestick chart, with a renderer toggle above it.
///
/// `records` must already be in ascending date order.
#[component]
pub fn PriceChart(records: Vec<StockRecord>) -> impl IntoView {
    let renderer = create_rw_signal(ChartRenderer::default());
    let area = PlotArea::default();
    let points = chart_points(&records);

    let y_axis = price_ticks(&points, &area, PRICE_TICKS)
        .into_iter()
        .map(|tick| {
            view! {
                <g class="tick">
                    <line x1=area.padding_left x2=area.width - area.padding_right y1=tick.position y2=tick.position class="grid-line"/>
                    <text x=area.padding_left - 6.0 y=tick.position text-anchor="end" dominant-baseline="middle">{tick.label}</text>
                </g>
            }
        })
        .collect_view();

    let x_axis = date_ticks(&points, &area, DATE_LABELS)
        .into_iter()
        .map(|tick| {
            view! {
                <text x=tick.position y=area.bottom() + 20.0 text-anchor="middle">{tick.label}</text>
            }
        })
        .collect_view();

    let lines = line_paths(&points, &area);
    let candles = candle_shapes(&points, &area);
    let legend = lines
        .iter()
        .map(|path| {
            view! {
                <span class="legend-item">
                    <span class="legend-swatch" style:background=path.color></span>
                    {path.name}
                </span>
            }
        })
        .collect_view();

    let plot = move || match renderer.get() {
        ChartRenderer::Line => lines
            .iter()
            .map(|path| {
                view! {
                    <polyline points=path.points.clone() fill="none" stroke=path.color stroke-width="2"/>
                }
            })
            .collect_view(),
        ChartRenderer::Candlestick => candles
            .iter()
            .map(|candle| {
                view! {
                    <rect
                        x=candle.x
                        y=candle.y
                        width=candle.width
                        height=candle.height
                        fill=candle.tone.color()
                    >
                        <title>{candle.label.clone()}</title>
                    </rect>
                }
            })
            .collect_view(),
    };

    let toggles = ChartRenderer::iter()
        .map(|kind| {
            view! {
                <button
                    class="toggle-btn"
                    class:active=move || renderer.get() == kind
                    on:click=move |_| renderer.set(kind)
                >
                    {kind.to_string()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="price-chart">
            <div class="chart-toolbar">
                <div class="renderer-toggle">{toggles}</div>
                <div class="legend" class:hidden=move || renderer.get() != ChartRenderer::Line>{legend}</div>
            </div>
            <svg viewBox=area.view_box() preserveAspectRatio="none" class="chart-svg">
                <g class="axis y-axis">{y_axis}</g>
                <g class="axis x-axis">{x_axis}</g>
                <g class="plot">{plot}</g>
            </svg>
        </div>
    }
}
