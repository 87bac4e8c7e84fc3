use leptos::*;
use leptos_router::{use_navigate, use_query_map};

use crate::app::AppRoute;
use crate::application::{StockSource, load_page};
use crate::config::AppConfig;
use crate::domain::stock::services::{filter_by_date_search, group_by_sector};
use crate::domain::stock::{Page, StockRecord, Ticker};
use crate::global_state::publish_selection;
use crate::presentation::components::{
    ErrorBanner, InfoBanner, LoadingOverlay, NO_DATA, Pagination, SectorPie, StockTable,
};
use crate::presentation::fetch::use_fetch;
use crate::presentation::table_model::{LISTING_COLUMNS, build_rows};
use crate::view_state::{FetchState, PageQuery, PaginationModel, ViewStatus};

type ListingState = FetchState<PageQuery, Page<StockRecord>>;

/// Paginated S&P 500 listing backed by the live gateway.
#[component]
pub fn ListingPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let source = StockSource::backend(&config);
    let query_map = use_query_map();
    let route_date = move || query_map.with(|params| params.get("date").cloned());

    let query = create_rw_signal(
        PageQuery::first(config.listing_page_size).with_date_filter(route_date_untracked(query_map)),
    );
    let state = create_rw_signal(ListingState::new(query.get_untracked()));
    create_effect(move |_| {
        let date = route_date();
        query.update(|current| current.filter_by(date));
    });

    let retry = use_fetch(query, state, move |query: &PageQuery| {
        let source = source.clone();
        let query = query.clone();
        Some(async move { load_page(&source, &query).await })
    });

    let search = create_rw_signal(String::new());
    let navigate = use_navigate();
    let on_row_click = Callback::new(move |ticker: Ticker| {
        publish_selection(ticker.clone());
        navigate(&AppRoute::Dashboard(ticker).path(), Default::default());
    });

    let pagination = Signal::derive(move || {
        let total = state.with(|current| current.data().map(|page| page.total_count).unwrap_or(0));
        query.with(|current| PaginationModel::new(current.page, current.page_size, total))
    });

    let content = move || {
        let needle = search.get();
        state.with(|current| match current.status() {
            ViewStatus::Failed(error) => view! { <ErrorBanner error=error.clone() on_retry=retry/> }.into_view(),
            ViewStatus::Empty => view! { <InfoBanner message=NO_DATA/> }.into_view(),
            ViewStatus::Loading { stale } => view! {
                <LoadingOverlay/>
                {stale.map(|page| listing_body(page, &needle, on_row_click))}
            }
            .into_view(),
            ViewStatus::Ready(page) => listing_body(page, &needle, on_row_click),
        })
    };

    view! {
        <section class="page listing-page">
            <div class="page-header">
                <h1>"S&P 500 Stocks"</h1>
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search by date (yyyy-MM-dd)"
                    prop:value=search
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <div class="page-content">{content}</div>
            <Pagination
                model=pagination
                options=config.page_size_options.clone()
                on_page=move |page: usize| query.update(|current| current.go_to(page))
                on_page_size=move |size: usize| query.update(|current| current.resize(size))
            />
        </section>
    }
}

fn route_date_untracked(query_map: Memo<leptos_router::ParamsMap>) -> Option<String> {
    query_map.with_untracked(|params| params.get("date").cloned())
}

fn listing_body(page: &Page<StockRecord>, search: &str, on_row_click: Callback<Ticker>) -> View {
    let visible = filter_by_date_search(&page.items, search);
    if visible.is_empty() {
        return view! { <InfoBanner message=format!("No records on this page match \"{}\"", search.trim())/> }
            .into_view();
    }

    let slices = group_by_sector(visible.iter().copied());
    let rows = build_rows(visible.iter().copied(), LISTING_COLUMNS);
    view! {
        <SectorPie slices=slices/>
        <StockTable columns=LISTING_COLUMNS rows=rows on_row_click=on_row_click/>
    }
    .into_view()
}
