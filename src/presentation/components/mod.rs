//! Presentational building blocks shared by the pages.

mod metric_card;
mod navbar;
mod price_chart;
mod sector_pie;
mod status;
mod stock_table;

pub use metric_card::MetricCard;
pub use navbar::NavBar;
pub use price_chart::PriceChart;
pub use sector_pie::SectorPie;
pub use status::{ErrorBanner, InfoBanner, LoadingOverlay, NO_DATA};
pub use stock_table::{Pagination, StockTable};
