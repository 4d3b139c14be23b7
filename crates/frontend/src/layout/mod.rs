pub mod header;
pub mod left;
pub mod menu;
pub mod nav_context;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use header::{Breadcrumb, Header};
use left::SideMenu;
use nav_context::NavContext;

/// Authenticated application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  SideMenu  |  Breadcrumb                 |
/// |            |  <route content>            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let nav = use_context::<NavContext>().expect("NavContext not found");
    let location = use_location();

    // Re-derive selection and expansion on every navigation event.
    Effect::new(move |_| {
        nav.sync_to_path(&location.pathname.get());
    });

    view! {
        <div class="app-layout">
            <Header />
            <div class="app-body">
                <aside
                    class="app-sidebar"
                    class:app-sidebar--collapsed=move || !nav.sidebar_open.get()
                >
                    <SideMenu />
                </aside>
                <main class="app-main">
                    <Breadcrumb />
                    <div class="app-content">
                        <Outlet />
                    </div>
                </main>
            </div>
        </div>
    }
}
