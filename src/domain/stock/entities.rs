use serde::{Deserialize, Deserializer, Serialize};
use time::Date;

use super::value_objects::{RecordKey, Ticker};
use crate::time_utils::wire_date;

/// Domain entity - one security's metrics as of one trading day.
///
/// Decoded straight from the backend's camelCase JSON and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    #[serde(with = "wire_date")]
    pub as_of_date: Date,
    pub ticker: Ticker,
    #[serde(default)]
    pub security: String,
    #[serde(default)]
    pub gics_sector: String,
    #[serde(default)]
    pub gics_sub_industry: String,
    #[serde(default)]
    pub headquarters_location: String,
    #[serde(default, deserialize_with = "founded_year")]
    pub founded: i32,
    pub open: f64,
    pub close: f64,
    pub dtd_change: f64,
    pub mtd_change: f64,
    pub qtd_change: f64,
    pub ytd_change: f64,
}

impl StockRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey { ticker: self.ticker.clone(), as_of_date: self.as_of_date }
    }

    pub fn row_id(&self) -> String {
        self.key().row_id()
    }
}

/// `founded` is an integer year, but some sources send strings like `"1923 (1886)"`.
/// Anything without a leading year reads as 0, shown as `n/a`.
fn founded_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Number(i32),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<RawYear>::deserialize(deserializer)? {
        Some(RawYear::Number(year)) => year,
        Some(RawYear::Text(text)) => {
            let digits: String = text.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().unwrap_or(0)
        }
        None | Some(RawYear::Other(_)) => 0,
    })
}

/// One page of a server-side listing.
///
/// `page_index` is zero-based; the one-based wire page number never leaks past the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page_index: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    /// Builds a page, dropping anything beyond `page_size`.
    pub fn new(mut items: Vec<T>, total_count: usize, page_index: usize, page_size: usize) -> Self {
        items.truncate(page_size);
        Self { items, total_count, page_index, page_size }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Full history of a single ticker, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub ticker: Ticker,
    pub records: Vec<StockRecord>,
    pub total_count: usize,
}

impl Series {
    /// Sorts `records` ascending by date; the backend's ordering is not relied upon.
    pub fn new(ticker: Ticker, mut records: Vec<StockRecord>, total_count: Option<usize>) -> Self {
        records.sort_by_key(|record| record.as_of_date);
        let total_count = total_count.unwrap_or(records.len());
        Self { ticker, records, total_count }
    }

    /// Most recent record
    pub fn latest(&self) -> Option<&StockRecord> {
        self.records.last()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(founded: &str) -> String {
        format!(
            r#"{{"asOfDate":"2024-01-02T00:00:00","ticker":"MMM","security":"3M","gicsSector":"Industrials",
            "gicsSubIndustry":"Industrial Conglomerates","headquartersLocation":"Saint Paul, Minnesota",
            "founded":{founded},"open":1.0,"close":2.0,"dtdChange":0.1,"mtdChange":0.2,"qtdChange":0.3,"ytdChange":0.4}}"#
        )
    }

    #[test]
    fn founded_accepts_numbers_and_year_strings() {
        let numeric: StockRecord = serde_json::from_str(&record_json("1902")).unwrap();
        assert_eq!(numeric.founded, 1902);
        let text: StockRecord = serde_json::from_str(&record_json(r#""2013 (1888)""#)).unwrap();
        assert_eq!(text.founded, 2013);
        let null: StockRecord = serde_json::from_str(&record_json("null")).unwrap();
        assert_eq!(null.founded, 0);
    }

    #[test]
    fn unreadable_founded_year_becomes_zero() {
        for raw in [r#""Unknown""#, r#""""#, "1977.5", "[1977]"] {
            let record: StockRecord = serde_json::from_str(&record_json(raw)).unwrap();
            assert_eq!(record.founded, 0, "founded = {raw}");
        }
    }

    #[test]
    fn row_id_combines_ticker_and_date() {
        let record: StockRecord = serde_json::from_str(&record_json("1902")).unwrap();
        assert_eq!(record.row_id(), "MMM-2024-01-02");
    }

    #[test]
    fn page_never_exceeds_its_size() {
        let page = Page::new(vec![1, 2, 3, 4], 40, 0, 3);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_count, 40);
    }
}
