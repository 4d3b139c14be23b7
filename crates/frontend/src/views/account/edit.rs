use contracts::domain::account::PasswordChange;
use leptos::prelude::*;

use crate::shared::api_utils;

/// Password change form (`/users/editpwd`).
#[component]
pub fn AccountEdit() -> impl IntoView {
    let (old_pwd, set_old_pwd) = signal(String::new());
    let (new_pwd, set_new_pwd) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (notice, set_notice) = signal::<Option<Result<String, String>>>(None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if new_pwd.get_untracked() != confirm.get_untracked() {
            set_notice.set(Some(Err("两次输入的新密码不一致".to_string())));
            return;
        }
        let payload = PasswordChange {
            old_pwd: old_pwd.get_untracked(),
            new_pwd: new_pwd.get_untracked(),
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api_utils::post_ack("/users/editpwd", &payload).await {
                Ok(()) => set_notice.set(Some(Ok("密码修改成功".to_string()))),
                Err(message) => set_notice.set(Some(Err(message))),
            }
        });
    };

    view! {
        <div class="page page--account-edit">
            <h2 class="page__title">"修改密码"</h2>
            <form class="form" on:submit=submit>
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
                <label class="form__field">
                    <span class="form__label">"原密码"</span>
                    <input
                        type="password"
                        prop:value=old_pwd
                        on:input=move |ev| set_old_pwd.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"新密码"</span>
                    <input
                        type="password"
                        prop:value=new_pwd
                        on:input=move |ev| set_new_pwd.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"确认新密码"</span>
                    <input
                        type="password"
                        prop:value=confirm
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit">"保存"</button>
            </form>
        </div>
    }
}
