use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::layout::nav_context::NavContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

/// Top bar: sidebar toggle, shop title, signed-in role with logout.
#[component]
pub fn Header() -> impl IntoView {
    let nav = use_context::<NavContext>().expect("NavContext not found");
    let session = use_session();
    let navigate = use_navigate();

    let role = move || {
        session
            .user()
            .map(|user| user.role)
            .unwrap_or_else(|| "商家".to_string())
    };

    let on_logout = move |_| {
        session.logout();
        navigate("/login", Default::default());
    };

    view! {
        <header class="app-header">
            <button class="app-header__toggle" on:click=move |_| nav.toggle_sidebar()>
                {icon("menu")}
            </button>
            <div class="app-header__title">"外卖商家后台"</div>
            <div class="app-header__user">
                <span class="app-header__role">{role}</span>
                <button class="app-header__logout" on:click=on_logout>
                    "退出登录"
                </button>
            </div>
        </header>
    }
}
