use contracts::domain::stats::SeriesStatistics;
use leptos::prelude::*;

use crate::shared::api_utils;

/// Date-by-series matrix shared by the statistics pages: one column per
/// date, one row per series.
#[component]
pub fn SeriesReport(title: &'static str, endpoint: &'static str) -> impl IntoView {
    let (stats, set_stats) = signal::<Option<SeriesStatistics>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match api_utils::get_json::<SeriesStatistics>(endpoint).await {
            Ok(data) => set_stats.set(Some(data)),
            Err(message) => set_error.set(Some(message)),
        }
    });

    view! {
        <div class="page page--statistics">
            <h2 class="page__title">{title}</h2>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="page__error">{message}</div> })
            }}
            {move || {
                stats
                    .get()
                    .map(|stats| {
                        let dates = stats.date.clone();
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"名称"</th>
                                        {dates
                                            .iter()
                                            .map(|date| view! { <th>{date.clone()}</th> })
                                            .collect_view()}
                                    </tr>
                                </thead>
                                <tbody>
                                    {stats
                                        .source
                                        .iter()
                                        .map(|series| {
                                            let cells = dates
                                                .iter()
                                                .map(|date| {
                                                    let cell = series
                                                        .value_on(date)
                                                        .map(|value| value.to_string())
                                                        .unwrap_or_else(|| "-".to_string());
                                                    view! { <td>{cell}</td> }
                                                })
                                                .collect_view();
                                            view! {
                                                <tr>
                                                    <td>{series.name.clone()}</td>
                                                    {cells}
                                                </tr>
                                            }
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
