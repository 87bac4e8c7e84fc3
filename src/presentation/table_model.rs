use strum::{Display, EnumIter};

use crate::domain::stock::{ChangeTone, StockRecord, Ticker, format_change};
use crate::time_utils::{format_iso_date, format_table_date};

/// Columns the stock tables can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum TableColumn {
    #[strum(serialize = "Date")]
    Date,
    #[strum(serialize = "As Of Date")]
    IsoDate,
    #[strum(serialize = "Ticker")]
    Ticker,
    #[strum(serialize = "Security")]
    Security,
    #[strum(serialize = "Sector")]
    Sector,
    #[strum(serialize = "Open")]
    Open,
    #[strum(serialize = "Close")]
    Close,
    #[strum(serialize = "Daily Change")]
    DailyChange,
    #[strum(serialize = "MTD Change")]
    MtdChange,
    #[strum(serialize = "QTD Change")]
    QtdChange,
    #[strum(serialize = "YTD Change")]
    YtdChange,
}

/// Main listing
pub const LISTING_COLUMNS: &[TableColumn] = &[
    TableColumn::Date,
    TableColumn::Ticker,
    TableColumn::Security,
    TableColumn::Sector,
    TableColumn::Open,
    TableColumn::Close,
    TableColumn::DailyChange,
    TableColumn::MtdChange,
    TableColumn::YtdChange,
];

/// Demo grid
pub const GRID_COLUMNS: &[TableColumn] = &[
    TableColumn::Date,
    TableColumn::Open,
    TableColumn::Close,
    TableColumn::DailyChange,
    TableColumn::MtdChange,
    TableColumn::YtdChange,
];

/// History grid under the ticker dashboard
pub const SERIES_COLUMNS: &[TableColumn] = &[
    TableColumn::IsoDate,
    TableColumn::Ticker,
    TableColumn::Security,
    TableColumn::Close,
    TableColumn::DailyChange,
    TableColumn::MtdChange,
    TableColumn::QtdChange,
    TableColumn::YtdChange,
];

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(String),
    Change { text: String, tone: ChangeTone },
}

impl Cell {
    fn change(value: f64) -> Self {
        Cell::Change { text: format_change(value), tone: ChangeTone::of(value) }
    }

    pub fn text(&self) -> &str {
        match self {
            Cell::Text(text) | Cell::Number(text) | Cell::Change { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRowModel {
    pub id: String,
    pub ticker: Ticker,
    pub cells: Vec<Cell>,
}

impl TableColumn {
    pub fn cell(&self, record: &StockRecord) -> Cell {
        match self {
            TableColumn::Date => Cell::Text(format_table_date(record.as_of_date)),
            TableColumn::IsoDate => Cell::Text(format_iso_date(record.as_of_date)),
            TableColumn::Ticker => Cell::Text(record.ticker.to_string()),
            TableColumn::Security => Cell::Text(record.security.clone()),
            TableColumn::Sector => Cell::Text(record.gics_sector.clone()),
            TableColumn::Open => Cell::Number(format!("{:.2}", record.open)),
            TableColumn::Close => Cell::Number(format!("{:.2}", record.close)),
            TableColumn::DailyChange => Cell::change(record.dtd_change),
            TableColumn::MtdChange => Cell::change(record.mtd_change),
            TableColumn::QtdChange => Cell::change(record.qtd_change),
            TableColumn::YtdChange => Cell::change(record.ytd_change),
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, TableColumn::Date | TableColumn::IsoDate | TableColumn::Ticker | TableColumn::Security | TableColumn::Sector)
    }
}

pub fn build_rows<'a>(
    records: impl IntoIterator<Item = &'a StockRecord>,
    columns: &[TableColumn],
) -> Vec<TableRowModel> {
    records
        .into_iter()
        .map(|record| TableRowModel {
            id: record.row_id(),
            ticker: record.ticker.clone(),
            cells: columns.iter().map(|column| column.cell(record)).collect(),
        })
        .collect()
}
