//! Fetch use cases: run one ticket's query through a gateway.

use crate::domain::errors::GatewayResult;
use crate::domain::logging::LogComponent;
use crate::domain::stock::{Page, Series, StockGateway, StockRecord, Ticker};
use crate::log_debug;
use crate::view_state::PageQuery;

/// Loads the listing page described by `query`, converting to the one-based wire page number.
pub async fn load_page<G: StockGateway>(gateway: &G, query: &PageQuery) -> GatewayResult<Page<StockRecord>> {
    log_debug!(
        LogComponent::Application("LoadPage"),
        "page={} size={} date={:?}",
        query.page,
        query.page_size,
        query.date_filter
    );
    gateway
        .list_records(query.wire_page_number(), query.page_size, query.date_filter.as_deref())
        .await
}

/// Loads the full history of `ticker`.
pub async fn load_series<G: StockGateway>(gateway: &G, ticker: &Ticker) -> GatewayResult<Series> {
    log_debug!(LogComponent::Application("LoadSeries"), "ticker={}", ticker);
    gateway.series_for_ticker(ticker).await
}
