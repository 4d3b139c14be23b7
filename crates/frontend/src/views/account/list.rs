use contracts::domain::account::Account;
use leptos::prelude::*;

use crate::shared::api_utils;
use crate::shared::date_utils::format_date;
use crate::shared::pagination::{PageState, Pager};

/// Paginated account table (`/users/list`) with row deletion.
#[component]
pub fn AccountList() -> impl IntoView {
    let state = PageState::new();
    let (items, set_items) = signal::<Vec<Account>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        let query = state.query.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::get_page::<Account>("/users/list", query).await {
                Ok(page) => {
                    state.total.set(page.total);
                    set_items.set(page.items);
                    set_error.set(None);
                }
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    // Refetch whenever the requested page changes.
    Effect::new(move |_| {
        state.query.track();
        fetch();
    });

    let delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|window| {
                window
                    .confirm_with_message("确定要删除该账号吗？")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::get_ack(&format!("/users/del?id={id}")).await {
                Ok(()) => fetch(),
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="page page--account-list">
            <h2 class="page__title">"账号列表"</h2>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="page__error">{message}</div> })
            }}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"账号"</th>
                        <th>"用户组"</th>
                        <th>"创建时间"</th>
                        <th>"操作"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|account| {
                                let id = account.id;
                                view! {
                                    <tr>
                                        <td>{account.account}</td>
                                        <td>{account.user_group}</td>
                                        <td>{format_date(&account.ctime)}</td>
                                        <td>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| delete(id)
                                            >
                                                "删除"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <Pager state=state />
        </div>
    }
}
