use contracts::domain::goods::Goods;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::api_utils;
use crate::shared::date_utils::format_date;
use crate::shared::pagination::{PageState, Pager};

/// Paginated catalog table (`/goods/list`) with edit/delete actions.
#[component]
pub fn GoodsList() -> impl IntoView {
    let navigate = use_navigate();
    let state = PageState::new();
    let (items, set_items) = signal::<Vec<Goods>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        let query = state.query.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::get_page::<Goods>("/goods/list", query).await {
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

    let delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|window| {
                window
                    .confirm_with_message("确定要删除这个商品吗？")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::get_ack(&format!("/goods/del?id={id}")).await {
                Ok(()) => fetch(),
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="page page--goods-list">
            <h2 class="page__title">"商品列表"</h2>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="page__error">{message}</div> })
            }}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"商品名称"</th>
                        <th>"商品分类"</th>
                        <th>"商品价格"</th>
                        <th>"商品图片"</th>
                        <th>"商品描述"</th>
                        <th>"创建时间"</th>
                        <th>"操作"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let navigate = navigate.clone();
                        items
                            .get()
                            .into_iter()
                            .map(|goods| {
                                let id = goods.id;
                                let navigate = navigate.clone();
                                view! {
                                    <tr>
                                        <td>{goods.name}</td>
                                        <td>{goods.category}</td>
                                        <td>{format!("¥{:.2}", goods.price)}</td>
                                        <td>
                                            <img
                                                class="data-table__thumb"
                                                src=api_utils::asset_url(&goods.img_url)
                                                alt="商品图片"
                                            />
                                        </td>
                                        <td>{goods.goods_desc}</td>
                                        <td>{format_date(&goods.ctime)}</td>
                                        <td>
                                            <button
                                                class="btn"
                                                on:click=move |_| {
                                                    navigate(
                                                        &format!("/goodsEdit/{id}"),
                                                        Default::default(),
                                                    );
                                                }
                                            >
                                                "编辑"
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
