use contracts::domain::goods::{GoodsCategory, GoodsCategoryUpsert};
use leptos::prelude::*;

use crate::shared::api_utils;
use crate::shared::pagination::{PageState, Pager};

/// Category management (`/goods/catelist`): paginated table with inline
/// enable/disable, deletion and an add form.
#[component]
pub fn GoodsCategories() -> impl IntoView {
    let state = PageState::new();
    let (items, set_items) = signal::<Vec<GoodsCategory>>(Vec::new());
    let (new_name, set_new_name) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        let query = state.query.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::get_page::<GoodsCategory>("/goods/catelist", query).await {
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

    let add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let cate_name = new_name.get_untracked();
        if cate_name.trim().is_empty() {
            return;
        }
        let payload = GoodsCategoryUpsert {
            id: None,
            cate_name,
            state: 1,
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::post_ack("/goods/addcate", &payload).await {
                Ok(()) => {
                    set_new_name.set(String::new());
                    fetch();
                }
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    let toggle_state = move |category: GoodsCategory| {
        let payload = GoodsCategoryUpsert {
            id: Some(category.id),
            cate_name: category.cate_name,
            state: if category.state == 1 { 0 } else { 1 },
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::post_ack("/goods/editcate", &payload).await {
                Ok(()) => fetch(),
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    let delete = move |id: i64| {
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::get_ack(&format!("/goods/delcate?id={id}")).await {
                Ok(()) => fetch(),
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="page page--goods-type">
            <h2 class="page__title">"商品分类"</h2>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="page__error">{message}</div> })
            }}
            <form class="form form--inline" on:submit=add>
                <input
                    type="text"
                    placeholder="新分类名称"
                    prop:value=new_name
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"添加分类"</button>
            </form>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"分类名称"</th>
                        <th>"状态"</th>
                        <th>"操作"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|category| {
                                let id = category.id;
                                let enabled = category.state == 1;
                                let for_toggle = category.clone();
                                view! {
                                    <tr>
                                        <td>{category.cate_name.clone()}</td>
                                        <td>{if enabled { "启用" } else { "停用" }}</td>
                                        <td>
                                            <button
                                                class="btn"
                                                on:click=move |_| toggle_state(for_toggle.clone())
                                            >
                                                {if enabled { "停用" } else { "启用" }}
                                            </button>
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
