use contracts::domain::shop::ShopProfile;
use leptos::prelude::*;

use crate::shared::api_utils;

/// Shop profile editor (`/shop/info` + `/shop/edit`). Avatar and gallery
/// images are display-only; uploads are a separate transport.
#[component]
pub fn ShopInfo() -> impl IntoView {
    let (profile, set_profile) = signal::<Option<ShopProfile>>(None);
    let (notice, set_notice) = signal::<Option<Result<String, String>>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match api_utils::get_json::<ShopProfile>("/shop/info").await {
            Ok(shop) => set_profile.set(Some(shop)),
            Err(message) => set_notice.set(Some(Err(message))),
        }
    });

    let edit_field = move |apply: fn(&mut ShopProfile, String), value: String| {
        set_profile.update(|profile| {
            if let Some(profile) = profile {
                apply(profile, value);
            }
        });
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = profile.get_untracked() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::post_ack("/shop/edit", &payload).await {
                Ok(()) => set_notice.set(Some(Ok("店铺信息已保存".to_string()))),
                Err(message) => set_notice.set(Some(Err(message))),
            }
        });
    };

    view! {
        <div class="page page--shop-info">
            <h2 class="page__title">"店铺信息"</h2>
            {move || {
                notice
                    .get()
                    .map(|result| match result {
                        Ok(message) => {
                            view! { <div class="page__notice">{message}</div> }.into_any()
                        }
                        Err(message) => {
                            view! { <div class="page__error">{message}</div> }.into_any()
                        }
                    })
            }}
            <Show when=move || profile.get().is_some()>
                <form class="form" on:submit=submit>
                    <label class="form__field">
                        <span class="form__label">"店铺名称"</span>
                        <input
                            type="text"
                            prop:value=move || {
                                profile.get().map(|p| p.shop_name).unwrap_or_default()
                            }
                            on:input=move |ev| {
                                edit_field(
                                    |p, v| p.shop_name = v,
                                    event_target_value(&ev),
                                )
                            }
                        />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"店铺公告"</span>
                        <textarea
                            prop:value=move || {
                                profile.get().map(|p| p.shop_announcement).unwrap_or_default()
                            }
                            on:input=move |ev| {
                                edit_field(
                                    |p, v| p.shop_announcement = v,
                                    event_target_value(&ev),
                                )
                            }
                        ></textarea>
                    </label>
                    <label class="form__field">
                        <span class="form__label">"起送价格"</span>
                        <input
                            type="text"
                            prop:value=move || {
                                profile
                                    .get()
                                    .map(|p| format!("{}", p.min_price))
                                    .unwrap_or_default()
                            }
                            on:input=move |ev| {
                                edit_field(
                                    |p, v| p.min_price = v.parse().unwrap_or(p.min_price),
                                    event_target_value(&ev),
                                )
                            }
                        />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"送达时间"</span>
                        <input
                            type="text"
                            prop:value=move || {
                                profile.get().map(|p| p.delivery_time).unwrap_or_default()
                            }
                            on:input=move |ev| {
                                edit_field(
                                    |p, v| p.delivery_time = v,
                                    event_target_value(&ev),
                                )
                            }
                        />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"配送描述"</span>
                        <input
                            type="text"
                            prop:value=move || {
                                profile
                                    .get()
                                    .map(|p| p.delivery_description)
                                    .unwrap_or_default()
                            }
                            on:input=move |ev| {
                                edit_field(
                                    |p, v| p.delivery_description = v,
                                    event_target_value(&ev),
                                )
                            }
                        />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"营业时间"</span>
                        <input
                            type="text"
                            prop:value=move || {
                                profile.get().map(|p| p.business_hours).unwrap_or_default()
                            }
                            on:input=move |ev| {
                                edit_field(
                                    |p, v| p.business_hours = v,
                                    event_target_value(&ev),
                                )
                            }
                        />
                    </label>
                    <div class="form__readonly">
                        {move || {
                            profile
                                .get()
                                .map(|p| {
                                    format!(
                                        "好评率 {:.1}%，销量 {}",
                                        p.shop_rating,
                                        p.shop_sales,
                                    )
                                })
                        }}
                    </div>
                    <button class="btn btn--primary" type="submit">"保存"</button>
                </form>
            </Show>
        </div>
    }
}
