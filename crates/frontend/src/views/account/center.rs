use contracts::domain::account::Account;
use leptos::prelude::*;

use crate::shared::api_utils;
use crate::shared::date_utils::format_date;
use crate::system::auth::context::use_session;

/// Personal information page (`/users/accountinfo`). Avatar changes go
/// through a separate upload endpoint and are display-only here.
#[component]
pub fn AccountCenter() -> impl IntoView {
    let session = use_session();

    let (info, set_info) = signal::<Option<Account>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    if let Some(user) = session.user() {
        let id = user.id;
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::get_json::<Account>(&format!("/users/accountinfo?id={id}")).await {
                Ok(account) => set_info.set(Some(account)),
                Err(message) => set_error.set(Some(message)),
            }
        });
    } else {
        set_error.set(Some("当前会话缺少用户信息，请重新登录".to_string()));
    }

    view! {
        <div class="page page--account-center">
            <h2 class="page__title">"个人信息"</h2>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="page__error">{message}</div> })
            }}
            {move || {
                info.get()
                    .map(|account| view! {
                        <div class="profile-card">
                            {account
                                .avatar
                                .as_deref()
                                .map(|avatar| view! {
                                    <img
                                        class="profile-card__avatar"
                                        src=api_utils::asset_url(avatar)
                                        alt="头像"
                                    />
                                })}
                            <dl class="profile-card__fields">
                                <dt>"账号"</dt>
                                <dd>{account.account.clone()}</dd>
                                <dt>"用户组"</dt>
                                <dd>{account.user_group.clone()}</dd>
                                <dt>"创建时间"</dt>
                                <dd>{format_date(&account.ctime)}</dd>
                            </dl>
                        </div>
                    })
            }}
        </div>
    }
}
