use time::Date;
use time::macros::format_description;

/// Parse the date part of an ISO-8601 string. Accepts `2024-01-02` as well as
/// timestamps such as `2024-01-02T00:00:00` or `2024-01-02T00:00:00Z`.
pub fn parse_iso_date(raw: &str) -> Result<Date, time::error::Parse> {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    Date::parse(date_part, format_description!("[year]-[month]-[day]"))
}

/// `2024-01-02`
pub fn format_iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Table cell format: `Jan 02, 2024`
pub fn format_table_date(date: Date) -> String {
    date.format(format_description!("[month repr:short] [day], [year]"))
        .unwrap_or_else(|_| format_iso_date(date))
}

/// Chart axis format: `Jan 02`
pub fn format_axis_label(date: Date) -> String {
    date.format(format_description!("[month repr:short] [day]"))
        .unwrap_or_else(|_| format_iso_date(date))
}

/// Serde adapter writing dates as `yyyy-MM-dd` and reading any ISO-8601 date or timestamp.
pub mod wire_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_iso_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_iso_date(&raw)
            .map_err(|e| serde::de::Error::custom(format!("invalid date {raw:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_plain_dates_and_timestamps() {
        assert_eq!(parse_iso_date("2024-01-02").unwrap(), date!(2024 - 01 - 02));
        assert_eq!(parse_iso_date("2024-01-02T00:00:00").unwrap(), date!(2024 - 01 - 02));
        assert_eq!(parse_iso_date(" 2024-03-15T13:45:00Z ").unwrap(), date!(2024 - 03 - 15));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_iso_date("02/01/2024").is_err());
        assert!(parse_iso_date("").is_err());
    }

    #[test]
    fn formats_for_table_and_axis() {
        let d = date!(2024 - 01 - 02);
        assert_eq!(format_iso_date(d), "2024-01-02");
        assert_eq!(format_table_date(d), "Jan 02, 2024");
        assert_eq!(format_axis_label(d), "Jan 02");
    }
}
