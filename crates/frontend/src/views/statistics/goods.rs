use leptos::prelude::*;

use super::report::SeriesReport;

/// Per-goods sales report (`/stats/goods`).
#[component]
pub fn GoodsStatistics() -> impl IntoView {
    view! { <SeriesReport title="商品统计" endpoint="/stats/goods" /> }
}
