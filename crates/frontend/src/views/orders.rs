use contracts::domain::order::Order;
use leptos::prelude::*;

use crate::shared::api_utils;
use crate::shared::date_utils::format_datetime;
use crate::shared::pagination::{PageState, Pager};

/// Paginated delivery-order table (`/order/list`).
#[component]
pub fn OrderList() -> impl IntoView {
    let state = PageState::new();
    let (items, set_items) = signal::<Vec<Order>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        let query = state.query.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::get_page::<Order>("/order/list", query).await {
                Ok(page) => {
                    state.total.set(page.total);
                    set_items.set(page.items);
                    set_error.set(None);
                }
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    Effect::new(move |_| {
        state.query.track();
        fetch();
    });

    view! {
        <div class="page page--order-list">
            <h2 class="page__title">"订单列表"</h2>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="page__error">{message}</div> })
            }}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"订单号"</th>
                        <th>"下单时间"</th>
                        <th>"联系电话"</th>
                        <th>"收货人"</th>
                        <th>"送货地址"</th>
                        <th>"送达时间"</th>
                        <th>"备注"</th>
                        <th>"订单金额"</th>
                        <th>"订单状态"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|order| view! {
                                <tr>
                                    <td>{order.order_no}</td>
                                    <td>{format_datetime(&order.order_time)}</td>
                                    <td>{order.phone}</td>
                                    <td>{order.consignee}</td>
                                    <td>{order.deliver_address}</td>
                                    <td>{format_datetime(&order.delivery_time)}</td>
                                    <td>{order.remarks}</td>
                                    <td>{format!("¥{:.2}", order.order_amount)}</td>
                                    <td>{order.order_state}</td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <Pager state=state />
        </div>
    }
}
