use leptos::*;

use crate::domain::errors::GatewayError;

pub const NO_DATA: &str = "No data available";

/// Spinner shown over the content area while a request is in flight.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    view! {
        <div class="loading-overlay" role="status">
            <div class="spinner"></div>
            <span>"Loading..."</span>
        </div>
    }
}

/// Error banner with a Retry button that re-issues the failed request.
#[component]
pub fn ErrorBanner(error: GatewayError, #[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <div class="error-text">
                <strong>{error.title()}</strong>
                <span>{error.to_string()}</span>
            </div>
            <button class="retry-btn" on:click=move |_| on_retry.call(())>
                "Retry"
            </button>
        </div>
    }
}

#[component]
pub fn InfoBanner(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="info-banner">{message}</div> }
}
