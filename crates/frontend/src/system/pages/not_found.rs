use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback for unknown routes.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__text">"页面不存在"</p>
            <A href="/home">"返回首页"</A>
        </div>
    }
}
