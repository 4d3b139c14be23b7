use contracts::domain::goods::{Goods, GoodsUpsert};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::shared::api_utils;

/// Edit-goods form for `/goodsEdit/:id`: loads the item from `/goods/info`
/// and saves through `/goods/edit`.
#[component]
pub fn GoodsUpdate() -> impl IntoView {
    let navigate = use_navigate();
    let params = use_params_map();

    let (goods_id, set_goods_id) = signal::<Option<i64>>(None);
    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (desc, set_desc) = signal(String::new());
    let (img_url, set_img_url) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    // Reload when the id segment changes.
    Effect::new(move |_| {
        let Some(id) = params.with(|map| map.get("id")) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::get_json::<Goods>(&format!("/goods/info?id={id}")).await {
                Ok(goods) => {
                    set_goods_id.set(Some(goods.id));
                    set_name.set(goods.name);
                    set_category.set(goods.category);
                    set_price.set(format!("{}", goods.price));
                    set_desc.set(goods.goods_desc);
                    set_img_url.set(Some(goods.img_url));
                    set_error.set(None);
                }
                Err(message) => set_error.set(Some(message)),
            }
        });
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = goods_id.get_untracked() else {
            return;
        };
        let price_value = match price.get_untracked().parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                set_error.set(Some("商品价格必须是数字".to_string()));
                return;
            }
        };
        let payload = GoodsUpsert {
            id: Some(id),
            name: name.get_untracked(),
            category: category.get_untracked(),
            price: price_value,
            goods_desc: desc.get_untracked(),
            img_url: img_url.get_untracked(),
        };
        let navigate = navigate.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::post_ack("/goods/edit", &payload).await {
                Ok(()) => navigate("/goodsList", Default::default()),
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="page page--goods-update">
            <h2 class="page__title">"修改商品"</h2>
            <form class="form" on:submit=submit>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="page__error">{message}</div> })
                }}
                {move || {
                    img_url
                        .get()
                        .filter(|path| !path.is_empty())
                        .map(|path| view! {
                            <img
                                class="form__preview"
                                src=api_utils::asset_url(&path)
                                alt="商品图片"
                            />
                        })
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
                    <input
                        type="text"
                        prop:value=category
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                    />
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
                <button class="btn btn--primary" type="submit">"保存修改"</button>
            </form>
        </div>
    }
}
