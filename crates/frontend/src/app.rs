use crate::layout::nav_context::NavContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session first: the route guard reads it. Restores a persisted token.
    provide_context(SessionContext::load());

    // Navigation UI state shared by the side menu and the shell.
    provide_context(NavContext::new());

    view! {
        <AppRoutes />
    }
}
