use contracts::domain::goods::{GoodsCategory, GoodsUpsert};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::api_utils;

/// Create-goods form (`/goods/add`). Category options come from
/// `/goods/categories`; image upload is a separate transport and the image
/// path, when present, is sent as-is.
#[component]
pub fn GoodsAdd() -> impl IntoView {
    let navigate = use_navigate();

    let (categories, set_categories) = signal::<Vec<GoodsCategory>>(Vec::new());
    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (desc, set_desc) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match api_utils::get_json::<Vec<GoodsCategory>>("/goods/categories").await {
            Ok(list) => {
                if let Some(first) = list.first() {
                    set_category.set(first.cate_name.clone());
                }
                set_categories.set(list);
            }
            Err(message) => set_error.set(Some(message)),
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let price_value = match price.get_untracked().parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                set_error.set(Some("商品价格必须是数字".to_string()));
                return;
            }
        };
        let payload = GoodsUpsert {
            id: None,
            name: name.get_untracked(),
            category: category.get_untracked(),
            price: price_value,
            goods_desc: desc.get_untracked(),
            img_url: None,
        };
        let navigate = navigate.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::post_ack("/goods/add", &payload).await {
                Ok(()) => navigate("/goodsList", Default::default()),
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="page page--goods-add">
            <h2 class="page__title">"添加商品"</h2>
            <form class="form" on:submit=submit>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="page__error">{message}</div> })
                }}
                <label class="form__field">
                    <span class="form__label">"商品名称"</span>
                    <input
                        type="text"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"商品分类"</span>
                    <select on:change=move |ev| set_category.set(event_target_value(&ev))>
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|item| {
                                    let value = item.cate_name.clone();
                                    let selected = value == category.get();
                                    view! {
                                        <option value=value.clone() selected=selected>
                                            {value.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="form__field">
                    <span class="form__label">"商品价格"</span>
                    <input
                        type="text"
                        prop:value=price
                        on:input=move |ev| set_price.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"商品描述"</span>
                    <textarea
                        prop:value=desc
                        on:input=move |ev| set_desc.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit">"上传商品"</button>
            </form>
        </div>
    }
}
