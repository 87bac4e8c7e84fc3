use leptos::*;
use leptos_router::use_params_map;

use crate::application::{StockSource, load_series};
use crate::config::AppConfig;
use crate::domain::stock::services::DashboardSummary;
use crate::domain::stock::{Series, Ticker};
use crate::global_state::selection;
use crate::presentation::components::{
    ErrorBanner, InfoBanner, LoadingOverlay, MetricCard, NO_DATA, PriceChart, StockTable,
};
use crate::presentation::fetch::use_fetch;
use crate::presentation::table_model::{SERIES_COLUMNS, build_rows};
use crate::view_state::{FetchState, ViewStatus};

/// Summary, chart and history for one ticker.
///
/// The `:ticker` route parameter wins; without one the last selected ticker is shown.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let source = StockSource::backend(&config);
    let params = use_params_map();
    let selection = selection();

    let ticker = create_memo(move |_| {
        params
            .with(|params| params.get("ticker").and_then(|raw| Ticker::new(raw).ok()))
            .or_else(|| selection.with(|current| current.current().cloned()))
    });

    let state = create_rw_signal(FetchState::<Option<Ticker>, Series>::new(ticker.get_untracked()));
    let retry = use_fetch(ticker, state, move |ticker: &Option<Ticker>| {
        let source = source.clone();
        let ticker = ticker.clone()?;
        Some(async move { load_series(&source, &ticker).await })
    });

    let content = move || {
        state.with(|current| {
            if current.query().is_none() {
                return view! { <InfoBanner message="Pick a stock from the listing to see its dashboard"/> }
                    .into_view();
            }
            match current.status() {
                ViewStatus::Failed(error) => view! { <ErrorBanner error=error.clone() on_retry=retry/> }.into_view(),
                ViewStatus::Empty => view! { <InfoBanner message=NO_DATA/> }.into_view(),
                ViewStatus::Loading { stale } => view! { <LoadingOverlay/> {stale.map(dashboard_body)} }.into_view(),
                ViewStatus::Ready(series) => dashboard_body(series),
            }
        })
    };

    view! { <section class="page dashboard-page">{content}</section> }
}

fn dashboard_body(series: &Series) -> View {
    let Some(summary) = DashboardSummary::from_series(series) else {
        return view! { <InfoBanner message=NO_DATA/> }.into_view();
    };

    let cards = summary.metrics.into_iter().map(|metric| view! { <MetricCard metric=metric/> }).collect_view();
    let rows = build_rows(&series.records, SERIES_COLUMNS);

    view! {
        <header class="dashboard-header">
            <h1>{format!("{} ({})", summary.security, summary.ticker)}</h1>
            <div class="chips">
                <span class="chip">{summary.gics_sector}</span>
                <span class="chip">{summary.gics_sub_industry}</span>
            </div>
            <p class="hq">{format!("{} · as of {}", summary.headquarters_location, summary.as_of)}</p>
        </header>
        <div class="metric-grid">{cards}</div>
        <PriceChart records=series.records.clone()/>
        <h2>{format!("History ({} records)", series.total_count)}</h2>
        <StockTable columns=SERIES_COLUMNS rows=rows/>
    }
    .into_view()
}
