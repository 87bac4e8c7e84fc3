use leptos::*;

use crate::application::{StockSource, load_page};
use crate::config::AppConfig;
use crate::domain::stock::{Page, StockRecord};
use crate::presentation::components::{ErrorBanner, InfoBanner, LoadingOverlay, NO_DATA, Pagination, StockTable};
use crate::presentation::fetch::use_fetch;
use crate::presentation::table_model::{GRID_COLUMNS, build_rows};
use crate::view_state::{FetchState, PageQuery, PaginationModel, ViewStatus};

/// Paged grid over the synthetic source. Works without a backend.
#[component]
pub fn DemoGridPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let source = StockSource::demo();
    let caption = format!("Source: {}", source.describe());

    let query = create_rw_signal(PageQuery::first(config.grid_page_size));
    let state = create_rw_signal(FetchState::<PageQuery, Page<StockRecord>>::new(query.get_untracked()));
    let retry = use_fetch(query, state, move |query: &PageQuery| {
        let source = source.clone();
        let query = query.clone();
        Some(async move { load_page(&source, &query).await })
    });

    let pagination = Signal::derive(move || {
        let total = state.with(|current| current.data().map(|page| page.total_count).unwrap_or(0));
        query.with(|current| PaginationModel::new(current.page, current.page_size, total))
    });

    let grid = |page: &Page<StockRecord>| {
        view! { <StockTable columns=GRID_COLUMNS rows=build_rows(&page.items, GRID_COLUMNS)/> }
    };

    let content = move || {
        state.with(|current| match current.status() {
            ViewStatus::Failed(error) => view! { <ErrorBanner error=error.clone() on_retry=retry/> }.into_view(),
            ViewStatus::Empty => view! { <InfoBanner message=NO_DATA/> }.into_view(),
            ViewStatus::Loading { stale } => view! { <LoadingOverlay/> {stale.map(grid)} }.into_view(),
            ViewStatus::Ready(page) => grid(page).into_view(),
        })
    };

    view! {
        <section class="page demo-page">
            <div class="page-header">
                <h1>"Demo Grid"</h1>
                <span class="caption">{caption}</span>
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
