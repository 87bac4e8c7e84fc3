pub mod stock_source;
pub mod use_cases;

pub use stock_source::StockSource;
pub use use_cases::{load_page, load_series};
