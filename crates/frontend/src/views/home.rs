use contracts::domain::stats::HomeTotals;
use leptos::prelude::*;

use crate::shared::api_utils;

/// Landing dashboard: headline totals from `/stats/total` plus the daily
/// order/amount series rendered as a table.
#[component]
pub fn HomePage() -> impl IntoView {
    let (totals, set_totals) = signal::<Option<HomeTotals>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match api_utils::get_json::<HomeTotals>("/stats/total").await {
            Ok(data) => set_totals.set(Some(data)),
            Err(message) => set_error.set(Some(message)),
        }
    });

    view! {
        <div class="page page--home">
            <h2 class="page__title">"数据概览"</h2>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="page__error">{message}</div> })
            }}
            {move || {
                totals
                    .get()
                    .map(|totals| {
                        let days: Vec<(String, u64, f64)> = totals
                            .x_data
                            .iter()
                            .cloned()
                            .zip(totals.order_data.iter().copied())
                            .zip(totals.amount_data.iter().copied())
                            .map(|((date, orders), amount)| (date, orders, amount))
                            .collect();
                        view! {
                            <div class="stat-cards">
                                <div class="stat-card">
                                    <div class="stat-card__label">"总订单"</div>
                                    <div class="stat-card__value">{totals.total_order}</div>
                                </div>
                                <div class="stat-card">
                                    <div class="stat-card__label">"总销售额"</div>
                                    <div class="stat-card__value">
                                        {format!("¥{:.2}", totals.total_amount)}
                                    </div>
                                </div>
                                <div class="stat-card">
                                    <div class="stat-card__label">"今日订单"</div>
                                    <div class="stat-card__value">{totals.today_order}</div>
                                </div>
                                <div class="stat-card">
                                    <div class="stat-card__label">"今日销售额"</div>
                                    <div class="stat-card__value">
                                        {format!("¥{:.2}", totals.today_amount)}
                                    </div>
                                </div>
                            </div>
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"日期"</th>
                                        <th>"订单数"</th>
                                        <th>"销售额"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {days
                                        .into_iter()
                                        .map(|(date, orders, amount)| view! {
                                            <tr>
                                                <td>{date}</td>
                                                <td>{orders}</td>
                                                <td>{format!("¥{:.2}", amount)}</td>
                                            </tr>
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                    })
            }}
        </div>
    }
}
