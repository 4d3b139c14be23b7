use contracts::domain::account::AccountUpsert;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::api_utils;

/// Create-account form (`/users/add`).
#[component]
pub fn AccountAdd() -> impl IntoView {
    let navigate = use_navigate();

    let (account, set_account) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (user_group, set_user_group) = signal("普通用户".to_string());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = AccountUpsert {
            id: None,
            account: account.get_untracked(),
            password: Some(password.get_untracked()),
            user_group: user_group.get_untracked(),
        };
        let navigate = navigate.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::post_ack("/users/add", &payload).await {
                Ok(()) => navigate("/accountList", Default::default()),
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="page page--account-add">
            <h2 class="page__title">"添加账号"</h2>
            <form class="form" on:submit=submit>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="page__error">{message}</div> })
                }}
                <label class="form__field">
                    <span class="form__label">"账号"</span>
                    <input
                        type="text"
                        prop:value=account
                        on:input=move |ev| set_account.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"密码"</span>
                    <input
                        type="password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"用户组"</span>
                    <select on:change=move |ev| set_user_group.set(event_target_value(&ev))>
                        <option value="普通用户" selected=move || user_group.get() == "普通用户">
                            "普通用户"
                        </option>
                        <option value="管理员" selected=move || user_group.get() == "管理员">
                            "管理员"
                        </option>
                    </select>
                </label>
                <button class="btn btn--primary" type="submit">"提交"</button>
            </form>
        </div>
    }
}
