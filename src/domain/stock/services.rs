use std::collections::HashMap;

use super::entities::{Series, StockRecord};
use super::value_objects::Ticker;
use crate::time_utils::format_iso_date;

/// Value shown in the large font of a metric card
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Number(f64),
    Year(i32),
}

impl MetricValue {
    pub fn display(&self) -> String {
        match self {
            MetricValue::Number(value) => format!("{value:.2}"),
            MetricValue::Year(year) if *year > 0 => year.to_string(),
            MetricValue::Year(_) => "n/a".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub title: &'static str,
    pub value: MetricValue,
    pub change: Option<f64>,
}

/// Header and metric cards for the ticker dashboard, taken from the latest record.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub ticker: Ticker,
    pub security: String,
    pub gics_sector: String,
    pub gics_sub_industry: String,
    pub headquarters_location: String,
    pub as_of: String,
    pub metrics: Vec<Metric>,
}

impl DashboardSummary {
    /// `None` for an empty series.
    pub fn from_series(series: &Series) -> Option<Self> {
        let latest = series.latest()?;
        Some(Self {
            ticker: latest.ticker.clone(),
            security: latest.security.clone(),
            gics_sector: latest.gics_sector.clone(),
            gics_sub_industry: latest.gics_sub_industry.clone(),
            headquarters_location: latest.headquarters_location.clone(),
            as_of: format_iso_date(latest.as_of_date),
            metrics: vec![
                Metric {
                    title: "Latest Close",
                    value: MetricValue::Number(latest.close),
                    change: Some(latest.dtd_change),
                },
                Metric {
                    title: "MTD Change",
                    value: MetricValue::Number(latest.mtd_change),
                    change: Some(latest.mtd_change),
                },
                Metric {
                    title: "QTD Change",
                    value: MetricValue::Number(latest.qtd_change),
                    change: Some(latest.qtd_change),
                },
                Metric {
                    title: "YTD Change",
                    value: MetricValue::Number(latest.ytd_change),
                    change: Some(latest.ytd_change),
                },
                Metric { title: "Founded", value: MetricValue::Year(latest.founded), change: None },
            ],
        })
    }
}

/// Client-side date search: keeps records whose `yyyy-MM-dd` date contains `search`.
///
/// Only narrows what is displayed; the page's server total is left untouched.
pub fn filter_by_date_search<'a>(records: &'a [StockRecord], search: &str) -> Vec<&'a StockRecord> {
    let needle = search.trim();
    records
        .iter()
        .filter(|record| needle.is_empty() || format_iso_date(record.as_of_date).contains(needle))
        .collect()
}

/// Aggregate of the records sharing one GICS sector
#[derive(Debug, Clone, PartialEq)]
pub struct SectorSlice {
    pub sector: String,
    pub count: usize,
    pub average_ytd: f64,
}

/// Groups by `gics_sector`, largest group first, ties broken by name.
pub fn group_by_sector<'a>(records: impl IntoIterator<Item = &'a StockRecord>) -> Vec<SectorSlice> {
    let mut groups: HashMap<&str, (usize, f64)> = HashMap::new();
    for record in records {
        let sector = if record.gics_sector.is_empty() { "Unclassified" } else { &record.gics_sector };
        let entry = groups.entry(sector).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.ytd_change;
    }

    let mut slices: Vec<SectorSlice> = groups
        .into_iter()
        .map(|(sector, (count, ytd_sum))| SectorSlice {
            sector: sector.to_string(),
            count,
            average_ytd: ytd_sum / count as f64,
        })
        .collect();
    slices.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.sector.cmp(&b.sector)));
    slices
}
