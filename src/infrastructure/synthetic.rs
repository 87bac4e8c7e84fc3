use time::{Date, Duration};

use crate::domain::errors::{GatewayError, GatewayResult};
use crate::domain::logging::LogComponent;
use crate::domain::stock::{Page, Series, StockGateway, StockRecord, Ticker};
use crate::log_debug;

/// (ticker, security, sector, sub-industry, headquarters, founded)
const COMPANIES: [(&str, &str, &str, &str, &str, i32); 6] = [
    ("AAPL", "Apple Inc.", "Information Technology", "Technology Hardware, Storage & Peripherals", "Cupertino, California", 1977),
    ("MSFT", "Microsoft", "Information Technology", "Systems Software", "Redmond, Washington", 1975),
    ("JNJ", "Johnson & Johnson", "Health Care", "Pharmaceuticals", "New Brunswick, New Jersey", 1886),
    ("XOM", "ExxonMobil", "Energy", "Integrated Oil & Gas", "Spring, Texas", 1999),
    ("JPM", "JPMorgan Chase", "Financials", "Diversified Banks", "New York City, New York", 2000),
    ("NEE", "NextEra Energy", "Utilities", "Multi-Utilities", "Juno Beach, Florida", 1984),
];

/// Deterministic in-memory data for the demo grid. Never touches the network.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticGateway {
    total: usize,
    first_day: Date,
}

impl Default for SyntheticGateway {
    fn default() -> Self {
        Self::new(100)
    }
}

impl SyntheticGateway {
    pub fn new(total: usize) -> Self {
        Self { total, first_day: time::macros::date!(2024 - 01 - 02) }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Record number `index`; the same index always yields the same record.
    pub fn record(&self, index: usize) -> StockRecord {
        let (ticker, security, sector, sub_industry, hq, founded) = COMPANIES[index % COMPANIES.len()];
        let day = (index / COMPANIES.len()) as i64;
        self.record_for(ticker, security, sector, sub_industry, hq, founded, index as f64, day)
    }

    #[allow(clippy::too_many_arguments)]
    fn record_for(
        &self,
        ticker: &'static str,
        security: &str,
        sector: &str,
        sub_industry: &str,
        hq: &str,
        founded: i32,
        seed: f64,
        day: i64,
    ) -> StockRecord {
        let open = 100.0 + 20.0 * (seed * 0.37).sin();
        let close = open * (1.0 + 0.02 * (seed * 1.3).sin());
        StockRecord {
            as_of_date: self.first_day.saturating_add(Duration::days(day)),
            ticker: Ticker::known(ticker),
            security: security.to_string(),
            gics_sector: sector.to_string(),
            gics_sub_industry: sub_industry.to_string(),
            headquarters_location: hq.to_string(),
            founded,
            open,
            close,
            dtd_change: (close / open - 1.0) * 100.0,
            mtd_change: 10.0 * (seed * 0.11).sin(),
            qtd_change: 12.0 * (seed * 0.07).cos(),
            ytd_change: 15.0 * (seed * 0.05).cos(),
        }
    }
}

impl StockGateway for SyntheticGateway {
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
        if date_filter.is_some() {
            log_debug!(LogComponent::Infrastructure("Synthetic"), "date filter ignored");
        }

        let start = (page_number - 1).saturating_mul(page_size);
        let end = start.saturating_add(page_size).min(self.total);
        let items = (start..end).map(|i| self.record(i)).collect();
        Ok(Page::new(items, self.total, page_number - 1, page_size))
    }

    async fn series_for_ticker(&self, ticker: &Ticker) -> GatewayResult<Series> {
        let Some((symbol, security, sector, sub_industry, hq, founded)) =
            COMPANIES.iter().copied().find(|company| company.0 == ticker.value())
        else {
            return Ok(Series::new(ticker.clone(), Vec::new(), Some(0)));
        };

        let records = (0..60)
            .map(|day| {
                self.record_for(symbol, security, sector, sub_industry, hq, founded, day as f64, day)
            })
            .collect();
        Ok(Series::new(ticker.clone(), records, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn pages_cover_the_synthetic_total() {
        let gateway = SyntheticGateway::new(25);
        let last = block_on(gateway.list_records(3, 10, None)).unwrap();
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.total_count, 25);
        assert_eq!(last.page_index, 2);
        let beyond = block_on(gateway.list_records(4, 10, None)).unwrap();
        assert!(beyond.is_empty());
    }

    #[test]
    fn records_are_stable_across_calls() {
        let gateway = SyntheticGateway::default();
        assert_eq!(gateway.record(42), gateway.record(42));
    }

    #[test]
    fn known_ticker_has_history_unknown_is_empty() {
        let gateway = SyntheticGateway::default();
        let series = block_on(gateway.series_for_ticker(&Ticker::new("MSFT").unwrap())).unwrap();
        assert_eq!(series.records.len(), 60);
        assert!(series.records.iter().all(|r| r.ticker.value() == "MSFT"));
        let unknown = block_on(gateway.series_for_ticker(&Ticker::new("NOPE").unwrap())).unwrap();
        assert!(unknown.is_empty());
    }
}
