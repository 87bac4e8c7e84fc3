use leptos::*;
use leptos_router::A;

use crate::app::AppRoute;
use crate::domain::stock::Ticker;
use crate::global_state::selection;

#[component]
pub fn NavBar() -> impl IntoView {
    let selection = selection();
    let dashboard_link = move || {
        selection.with(|current| current.current().cloned()).map(|ticker: Ticker| {
            view! {
                <A href=AppRoute::Dashboard(ticker.clone()).path() class="nav-link">
                    {format!("{ticker} Dashboard")}
                </A>
            }
        })
    };

    view! {
        <nav class="navbar">
            <span class="brand">"S&P 500 Analysis"</span>
            <A href=AppRoute::Listing.path() class="nav-link" exact=true>"Stocks"</A>
            {dashboard_link}
            <A href=AppRoute::Demo.path() class="nav-link">"Demo Grid"</A>
        </nav>
    }
}
