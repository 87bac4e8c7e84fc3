use leptos::*;
use leptos_router::{Route, Router, Routes};

use crate::config::AppConfig;
use crate::domain::stock::Ticker;
use crate::global_state::globals;
use crate::presentation::components::NavBar;
use crate::presentation::pages::{DashboardPage, DemoGridPage, ListingPage};

/// Client-side routes
#[derive(Debug, Clone, PartialEq)]
pub enum AppRoute {
    /// `/`, optionally `/?date=yyyy-MM-dd`
    Listing,
    /// `/dashboard/:ticker`
    Dashboard(Ticker),
    /// `/dashboard` with no ticker: falls back to the current selection
    SelectedDashboard,
    /// `/test`, synthetic data
    Demo,
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::Listing => "/".to_string(),
            AppRoute::Dashboard(ticker) => format!("/dashboard/{}", urlencoding::encode(ticker.value())),
            AppRoute::SelectedDashboard => "/dashboard".to_string(),
            AppRoute::Demo => "/test".to_string(),
        }
    }

    /// Resolves a location path (query string ignored) to a route.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(AppRoute::Listing),
            ["dashboard"] => Some(AppRoute::SelectedDashboard),
            ["dashboard", raw] => {
                let decoded = urlencoding::decode(raw).ok()?;
                Ticker::new(&decoded).ok().map(AppRoute::Dashboard)
            }
            ["test"] => Some(AppRoute::Demo),
            _ => None,
        }
    }
}

/// Root component: shared config, global signals and the router.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);
    globals();

    view! {
        <style>{STYLES}</style>
        <Router>
            <div class="stock-dashboard-app">
                <NavBar/>
                <main>
                    <Routes>
                        <Route path="/" view=ListingPage/>
                        <Route path="/dashboard/:ticker" view=DashboardPage/>
                        <Route path="/dashboard" view=DashboardPage/>
                        <Route path="/test" view=DemoGridPage/>
                        <Route path="/*any" view=|| view! { <h1 class="not-found">"Page not found"</h1> }/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

const STYLES: &str = r#"
.stock-dashboard-app {
    font-family: 'Roboto', -apple-system, BlinkMacSystemFont, sans-serif;
    background: #f4f6f8;
    min-height: 100vh;
    color: #212121;
}

.navbar {
    display: flex;
    align-items: center;
    gap: 24px;
    padding: 12px 24px;
    background: #1e3c72;
    color: white;
}

.navbar .brand {
    font-weight: 700;
    font-size: 18px;
    margin-right: auto;
}

.nav-link {
    color: rgba(255, 255, 255, 0.8);
    text-decoration: none;
}

.nav-link[aria-current="page"] {
    color: white;
    border-bottom: 2px solid white;
}

main {
    padding: 24px;
}

.page-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
    margin-bottom: 16px;
}

.page-content {
    position: relative;
    min-height: 120px;
}

.search-input {
    padding: 8px 12px;
    border: 1px solid #c4c4c4;
    border-radius: 4px;
    min-width: 240px;
}

.caption {
    color: #757575;
    font-size: 13px;
}

.stock-table {
    width: 100%;
    border-collapse: collapse;
    background: white;
}

.stock-table th,
.stock-table td {
    padding: 8px 12px;
    border-bottom: 1px solid #e0e0e0;
    text-align: left;
}

.stock-table .numeric {
    text-align: right;
    font-variant-numeric: tabular-nums;
}

.stock-table tr.clickable {
    cursor: pointer;
}

.stock-table tr.clickable:hover {
    background: #e3f2fd;
}

.change-positive {
    color: #2e7d32;
}

.change-negative {
    color: #d32f2f;
}

.pagination {
    display: flex;
    justify-content: flex-end;
    align-items: center;
    gap: 16px;
    padding: 12px 0;
}

.page-btn,
.toggle-btn,
.retry-btn {
    padding: 6px 12px;
    border: 1px solid #1e3c72;
    border-radius: 4px;
    background: white;
    color: #1e3c72;
    cursor: pointer;
}

.page-btn:disabled {
    opacity: 0.4;
    cursor: default;
}

.toggle-btn.active {
    background: #1e3c72;
    color: white;
}

.loading-overlay {
    position: absolute;
    inset: 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 8px;
    background: rgba(255, 255, 255, 0.7);
    z-index: 2;
}

.spinner {
    width: 36px;
    height: 36px;
    border: 4px solid #bbdefb;
    border-top-color: #1e3c72;
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

.error-banner,
.info-banner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
    padding: 12px 16px;
    border-radius: 4px;
    margin-bottom: 16px;
}

.error-banner {
    background: #fdecea;
    color: #611a15;
}

.error-text {
    display: flex;
    flex-direction: column;
}

.info-banner {
    background: #e8f4fd;
    color: #0d3c61;
}

.dashboard-header .chips {
    display: flex;
    gap: 8px;
}

.chip {
    padding: 2px 10px;
    border-radius: 12px;
    background: #e0e0e0;
    font-size: 13px;
}

.metric-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
    gap: 16px;
    margin: 16px 0;
}

.metric-card {
    background: white;
    border-radius: 8px;
    padding: 16px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
}

.metric-title {
    font-size: 13px;
    color: #757575;
}

.metric-value {
    font-size: 24px;
    font-weight: 700;
}

.price-chart {
    background: white;
    border-radius: 8px;
    padding: 16px;
}

.chart-toolbar {
    display: flex;
    justify-content: space-between;
    margin-bottom: 8px;
}

.renderer-toggle {
    display: flex;
    gap: 8px;
}

.legend.hidden {
    visibility: hidden;
}

.legend-item {
    margin-left: 12px;
}

.legend-swatch {
    display: inline-block;
    width: 10px;
    height: 10px;
    margin-right: 4px;
    border-radius: 2px;
}

.chart-svg {
    width: 100%;
    height: 400px;
}

.chart-svg .grid-line {
    stroke: #eeeeee;
}

.chart-svg text {
    font-size: 11px;
    fill: #616161;
}

.sector-pie {
    display: flex;
    align-items: center;
    gap: 24px;
    margin-bottom: 16px;
}

.pie-legend {
    list-style: none;
    padding: 0;
}
"#;
