use gloo_net::http::Request;

use super::dto::{decode_page, decode_series};
use crate::config::AppConfig;
use crate::domain::errors::{GatewayError, GatewayResult};
use crate::domain::logging::{LogComponent, LogEntry, LogLevel, get_logger};
use crate::domain::stock::{Page, Series, StockGateway, StockRecord, Ticker};
use crate::log_error;

/// REST client for the S&P 500 analysis backend
#[derive(Debug, Clone, PartialEq)]
pub struct HttpStockGateway {
    base_url: String,
}

impl HttpStockGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.backend_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}?pageNumber=..&pageSize=..[&date=..]`
    pub fn listing_url(&self, page_number: usize, page_size: usize, date_filter: Option<&str>) -> String {
        let mut url = format!("{}?pageNumber={}&pageSize={}", self.base_url, page_number, page_size);
        if let Some(date) = date_filter.map(str::trim).filter(|d| !d.is_empty()) {
            url.push_str("&date=");
            url.push_str(&urlencoding::encode(date));
        }
        url
    }

    /// `{base}/ticker?ticker=..`
    pub fn series_url(&self, ticker: &Ticker) -> String {
        format!("{}/ticker?ticker={}", self.base_url, urlencoding::encode(ticker.value()))
    }

    async fn fetch_body(&self, url: &str) -> GatewayResult<String> {
        get_logger().info(LogComponent::Infrastructure("StockApi"), &format!("📈 GET {url}"));

        let response = Request::get(url).send().await.map_err(|e| {
            log_error!(LogComponent::Infrastructure("StockApi"), "❌ request to {} failed: {}", url, e);
            GatewayError::Network(e.to_string())
        })?;

        if !response.ok() {
            let error = GatewayError::Server {
                status: response.status(),
                status_text: response.status_text(),
            };
            log_error!(LogComponent::Infrastructure("StockApi"), "❌ {}: {}", url, error);
            return Err(error);
        }

        response
            .text()
            .await
            .map_err(|e| GatewayError::Network(format!("reading body: {e}")))
    }
}

impl StockGateway for HttpStockGateway {
    async fn list_records(
        &self,
        page_number: usize,
        page_size: usize,
        date_filter: Option<&str>,
    ) -> GatewayResult<Page<StockRecord>> {
        if page_number == 0 || page_size == 0 {
            return Err(GatewayError::InvalidQuery(format!(
                "pageNumber={page_number} pageSize={page_size}"
            )));
        }

        let body = self.fetch_body(&self.listing_url(page_number, page_size, date_filter)).await?;
        let page = decode_page(&body, page_number, page_size)?;

        get_logger().log(
            LogEntry::new(LogLevel::Info, LogComponent::Infrastructure("StockApi"), &format!("✅ page {page_number} loaded"))
                .with_metadata(&format!("rows={} total={}", page.len(), page.total_count)),
        );
        Ok(page)
    }

    async fn series_for_ticker(&self, ticker: &Ticker) -> GatewayResult<Series> {
        let body = self.fetch_body(&self.series_url(ticker)).await?;
        let series = decode_series(&body, ticker)?;

        get_logger().log(
            LogEntry::new(LogLevel::Info, LogComponent::Infrastructure("StockApi"), &format!("✅ {ticker} history loaded"))
                .with_metadata(&format!("records={}", series.records.len())),
        );
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_carries_one_based_page_and_optional_date() {
        let gateway = HttpStockGateway::new("https://localhost:7241/api/SP500Analysis/");
        insta::assert_snapshot!(
            gateway.listing_url(1, 20, None),
            @"https://localhost:7241/api/SP500Analysis?pageNumber=1&pageSize=20"
        );
        insta::assert_snapshot!(
            gateway.listing_url(3, 50, Some("2024-01-02")),
            @"https://localhost:7241/api/SP500Analysis?pageNumber=3&pageSize=50&date=2024-01-02"
        );
        assert_eq!(gateway.listing_url(1, 20, Some("  ")), gateway.listing_url(1, 20, None));
    }

    #[test]
    fn series_url_encodes_ticker() {
        let gateway = HttpStockGateway::new("http://api.test/stocks");
        assert_eq!(
            gateway.series_url(&Ticker::new("brk b").unwrap()),
            "http://api.test/stocks/ticker?ticker=BRK%20B"
        );
    }
}
