use leptos::prelude::*;

use super::report::SeriesReport;

/// Per-day order report (`/stats/order`).
#[component]
pub fn OrderStatistics() -> impl IntoView {
    view! { <SeriesReport title="订单统计" endpoint="/stats/order" /> }
}
