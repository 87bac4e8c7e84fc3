use crate::config::AppConfig;
use crate::domain::errors::GatewayResult;
use crate::domain::stock::{Page, Series, StockGateway, StockRecord, Ticker};
use crate::infrastructure::{HttpStockGateway, SyntheticGateway};

/// The gateway a screen reads from: the real backend or the demo generator.
#[derive(Debug, Clone, PartialEq)]
pub enum StockSource {
    Http(HttpStockGateway),
    Synthetic(SyntheticGateway),
}

impl StockSource {
    pub fn backend(config: &AppConfig) -> Self {
        StockSource::Http(HttpStockGateway::from_config(config))
    }

    pub fn demo() -> Self {
        StockSource::Synthetic(SyntheticGateway::default())
    }

    pub fn describe(&self) -> String {
        match self {
            StockSource::Http(gateway) => gateway.base_url().to_string(),
            StockSource::Synthetic(gateway) => format!("synthetic ({} records)", gateway.total()),
        }
    }
}

impl StockGateway for StockSource {
    async fn list_records(
        &self,
        page_number: usize,
        page_size: usize,
        date_filter: Option<&str>,
    ) -> GatewayResult<Page<StockRecord>> {
        match self {
            StockSource::Http(gateway) => gateway.list_records(page_number, page_size, date_filter).await,
            StockSource::Synthetic(gateway) => gateway.list_records(page_number, page_size, date_filter).await,
        }
    }

    async fn series_for_ticker(&self, ticker: &Ticker) -> GatewayResult<Series> {
        match self {
            StockSource::Http(gateway) => gateway.series_for_ticker(ticker).await,
            StockSource::Synthetic(gateway) => gateway.series_for_ticker(ticker).await,
        }
    }
}
