use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::system::auth::api;
use crate::system::auth::context::use_session;

/// Sign-in page. On success the session is stored and the user returns to
/// the page that sent them here (`?redirect=`), or to the home route.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let query = use_query_map();

    let (account, set_account) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest {
            account: account.get_untracked(),
            password: password.get_untracked(),
        };
        let redirect = query
            .with_untracked(|params| params.get("redirect"))
            .unwrap_or_else(|| "/home".to_string());
        let navigate = navigate.clone();
        set_busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::login(&request).await {
                Ok((token, user)) => {
                    session.login(token, user);
                    navigate(&redirect, Default::default());
                }
                Err(message) => set_error.set(Some(message)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=submit>
                <h1 class="login-card__title">"商家后台登录"</h1>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="login-card__error">{message}</div> })
                }}
                <input
                    class="login-card__input"
                    type="text"
                    placeholder="账号"
                    prop:value=account
                    on:input=move |ev| set_account.set(event_target_value(&ev))
                />
                <input
                    class="login-card__input"
                    type="password"
                    placeholder="密码"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button
                    class="login-card__submit"
                    type="submit"
                    disabled=move || busy.get()
                >
                    {move || if busy.get() { "登录中…" } else { "登录" }}
                </button>
            </form>
        </div>
    }
}
