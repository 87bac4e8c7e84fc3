use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::domain::errors::GatewayError;

/// Value Object - exchange ticker, trimmed and upper-cased, never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    pub fn new(raw: &str) -> Result<Self, GatewayError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GatewayError::InvalidTicker(raw.to_string()));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// For symbols baked into the binary, which are already valid.
    pub(crate) fn known(symbol: &'static str) -> Self {
        Self(symbol.to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Ticker {
    type Error = GatewayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

/// Identity of a record: the same ticker appears once per trading day
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub ticker: Ticker,
    pub as_of_date: Date,
}

impl RecordKey {
    /// Stable DOM/row id, `TICKER-yyyy-mm-dd`
    pub fn row_id(&self) -> String {
        format!("{}-{}", self.ticker, crate::time_utils::format_iso_date(self.as_of_date))
    }
}

/// Styling bucket for a signed percentage. Zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeTone {
    Positive,
    Negative,
}

impl ChangeTone {
    pub fn of(change: f64) -> Self {
        if change >= 0.0 { ChangeTone::Positive } else { ChangeTone::Negative }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ChangeTone::Positive => "change-positive",
            ChangeTone::Negative => "change-negative",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ChangeTone::Positive => "#2e7d32",
            ChangeTone::Negative => "#d32f2f",
        }
    }
}

/// `+1.25%`, `-0.40%`, `+0.00%`
pub fn format_change(change: f64) -> String {
    // -0.0 compares equal to zero but would print as "-0.00"
    let change = if change == 0.0 { 0.0 } else { change };
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{sign}{change:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_is_normalised() {
        assert_eq!(Ticker::new("  aapl ").unwrap().value(), "AAPL");
        assert_eq!(Ticker::new("brk.b").unwrap().to_string(), "BRK.B");
    }

    #[test]
    fn empty_ticker_is_rejected() {
        assert_eq!(Ticker::new("   "), Err(GatewayError::InvalidTicker("   ".to_string())));
    }

    #[test]
    fn negative_zero_formats_as_positive_zero() {
        assert_eq!(format_change(-0.0), "+0.00%");
        assert_eq!(ChangeTone::of(-0.0), ChangeTone::Positive);
    }
}
