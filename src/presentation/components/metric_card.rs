use leptos::*;

use crate::domain::stock::services::Metric;
use crate::domain::stock::{ChangeTone, format_change};

/// One headline number. The change line is green for `change >= 0`, red otherwise.
#[component]
pub fn MetricCard(metric: Metric) -> impl IntoView {
    let change = metric.change.map(|change| {
        let tone = ChangeTone::of(change);
        view! { <div class=format!("metric-change {}", tone.css_class())>{format_change(change)}</div> }
    });

    view! {
        <div class="metric-card">
            <div class="metric-title">{metric.title}</div>
            <div class="metric-value">{metric.value.display()}</div>
            {change}
        </div>
    }
}
