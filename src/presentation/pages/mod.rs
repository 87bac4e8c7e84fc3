mod dashboard;
mod demo_grid;
mod listing;

pub use dashboard::DashboardPage;
pub use demo_grid::DemoGridPage;
pub use listing::ListingPage;
