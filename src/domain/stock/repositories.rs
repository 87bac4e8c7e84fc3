use super::entities::{Page, Series, StockRecord};
use super::value_objects::Ticker;
use crate::domain::errors::GatewayResult;

/// Read-only access to the stock analysis backend.
///
/// Implementations do not cache and do not retry; the caller decides what to do with a failure.
/// Futures are polled on the browser's single-threaded executor, so they need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait StockGateway {
    /// One page of the listing. `page_number` is one-based, `page_size` is positive.
    async fn list_records(
        &self,
        page_number: usize,
        page_size: usize,
        date_filter: Option<&str>,
    ) -> GatewayResult<Page<StockRecord>>;

    /// Every record of `ticker`, oldest first. Unknown tickers may yield an empty series.
    async fn series_for_ticker(&self, ticker: &Ticker) -> GatewayResult<Series>;
}
