use serde::Deserialize;

use crate::domain::errors::{GatewayError, GatewayResult};
use crate::domain::logging::LogComponent;
use crate::domain::stock::{Page, Series, StockRecord, Ticker};
use crate::{log_debug, log_warn};

/// One element of a `data` array. Rows that do not decode (an empty ticker, a missing price)
/// are kept as raw JSON so the rest of the page survives.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WireRow {
    Record(StockRecord),
    Malformed(serde_json::Value),
}

/// Listing envelope: `{ "data": [...], "totalRecords": n }`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope {
    pub data: Vec<WireRow>,
    #[serde(default)]
    pub total_records: Option<usize>,
}

/// The ticker endpoint answers with a bare array; an envelope is tolerated too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SeriesBody {
    Bare(Vec<WireRow>),
    Enveloped(PageEnvelope),
}

fn valid_records(rows: Vec<WireRow>, context: &str) -> Vec<StockRecord> {
    rows.into_iter()
        .filter_map(|row| match row {
            WireRow::Record(record) => Some(record),
            WireRow::Malformed(raw) => {
                log_warn!(LogComponent::Infrastructure("Dto"), "skipping malformed {} row: {}", context, raw);
                None
            }
        })
        .collect()
}

/// Decodes a listing body into a zero-based [`Page`].
pub fn decode_page(body: &str, page_number: usize, page_size: usize) -> GatewayResult<Page<StockRecord>> {
    let envelope: PageEnvelope = serde_json::from_str(body)
        .map_err(|e| GatewayError::Decode(format!("listing body: {e}")))?;

    let records = valid_records(envelope.data, "listing");
    let total = envelope.total_records.unwrap_or(records.len());
    if records.len() > page_size {
        log_warn!(
            LogComponent::Infrastructure("Dto"),
            "server returned {} rows for page size {}, truncating",
            records.len(),
            page_size
        );
    }
    Ok(Page::new(records, total, page_number.saturating_sub(1), page_size))
}

/// Decodes a ticker body into a date-ascending [`Series`].
pub fn decode_series(body: &str, ticker: &Ticker) -> GatewayResult<Series> {
    let decoded: SeriesBody = serde_json::from_str(body)
        .map_err(|e| GatewayError::Decode(format!("series body for {ticker}: {e}")))?;

    let (rows, total) = match decoded {
        SeriesBody::Bare(rows) => (rows, None),
        SeriesBody::Enveloped(envelope) => (envelope.data, envelope.total_records),
    };
    let records = valid_records(rows, ticker.value());
    if !records.windows(2).all(|pair| pair[0].as_of_date <= pair[1].as_of_date) {
        log_debug!(LogComponent::Infrastructure("Dto"), "series for {} arrived unordered", ticker);
    }
    Ok(Series::new(ticker.clone(), records, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = r#"{"asOfDate":"2024-01-03","ticker":"AAPL","security":"Apple Inc.","gicsSector":"Information Technology","gicsSubIndustry":"Technology Hardware","headquartersLocation":"Cupertino, California","founded":1977,"open":183.2,"close":185.5,"dtdChange":1.25,"mtdChange":2.0,"qtdChange":2.0,"ytdChange":10.0}"#;
    const OLDER_ROW: &str = r#"{"asOfDate":"2024-01-02","ticker":"AAPL","security":"Apple Inc.","gicsSector":"Information Technology","gicsSubIndustry":"Technology Hardware","headquartersLocation":"Cupertino, California","founded":1977,"open":180.0,"close":183.2,"dtdChange":0.5,"mtdChange":0.5,"qtdChange":0.5,"ytdChange":9.0}"#;

    #[test]
    fn listing_uses_zero_based_index() {
        let body = format!(r#"{{"data":[{ROW}],"totalRecords":41}}"#);
        let page = decode_page(&body, 3, 20).unwrap();
        assert_eq!(page.page_index, 2);
        assert_eq!(page.total_count, 41);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn missing_total_falls_back_to_row_count() {
        let body = format!(r#"{{"data":[{ROW},{OLDER_ROW}]}}"#);
        assert_eq!(decode_page(&body, 1, 20).unwrap().total_count, 2);
    }

    #[test]
    fn oversized_page_is_truncated() {
        let body = format!(r#"{{"data":[{ROW},{OLDER_ROW}],"totalRecords":2}}"#);
        let page = decode_page(&body, 1, 1).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn bare_series_is_sorted() {
        let ticker = Ticker::new("AAPL").unwrap();
        let series = decode_series(&format!("[{ROW},{OLDER_ROW}]"), &ticker).unwrap();
        assert_eq!(series.total_count, 2);
        assert_eq!(series.latest().unwrap().close, 185.5);
        assert_eq!(series.records[0].close, 183.2);
    }

    #[test]
    fn enveloped_series_keeps_optional_total() {
        let ticker = Ticker::new("AAPL").unwrap();
        let series = decode_series(&format!(r#"{{"data":[{ROW}],"totalRecords":7}}"#), &ticker).unwrap();
        assert_eq!(series.total_count, 7);
        let empty = decode_series("[]", &ticker).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn unknown_founded_year_keeps_the_row() {
        let unknown = ROW.replace(r#""founded":1977"#, r#""founded":"Unknown""#);
        let body = format!(r#"{{"data":[{OLDER_ROW},{unknown}],"totalRecords":2}}"#);
        let page = decode_page(&body, 1, 20).unwrap();
        assert_eq!(page.items.len(), 2);
        assert!(page.items.iter().any(|r| r.founded == 0));
    }

    #[test]
    fn rows_with_empty_ticker_are_skipped() {
        let blank = ROW.replace(r#""ticker":"AAPL""#, r#""ticker":"""#);

        let page = decode_page(&format!(r#"{{"data":[{OLDER_ROW},{blank}]}}"#), 1, 20).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_count, 1);

        let ticker = Ticker::new("AAPL").unwrap();
        let series = decode_series(&format!("[{blank},{OLDER_ROW}]"), &ticker).unwrap();
        assert_eq!(series.records.len(), 1);
        assert_eq!(series.records[0].close, 183.2);
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(decode_page("<html>", 1, 20), Err(GatewayError::Decode(_))));
        let ticker = Ticker::new("AAPL").unwrap();
        assert!(matches!(decode_series(r#"{"oops":1}"#, &ticker), Err(GatewayError::Decode(_))));
    }
}
