//! Collapsible side navigation. Selection and forced-open ancestors come
//! from the resolver via `NavContext`; manual opens stay untouched.

use contracts::navigation::MenuEntry;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::layout::menu;
use crate::layout::nav_context::NavContext;
use crate::shared::icons::icon;

#[component]
pub fn SideMenu() -> impl IntoView {
    let nav = use_context::<NavContext>().expect("NavContext not found");

    view! {
        <nav class="side-menu">
            <ul class="side-menu__list">
                {menu::menu_tree()
                    .iter()
                    .map(|entry| entry_view(entry, nav, 0))
                    .collect_view()}
            </ul>
        </nav>
    }
}

fn entry_view(entry: &'static MenuEntry, nav: NavContext, depth: usize) -> AnyView {
    let id = entry.id.as_deref();
    let label = entry.label();
    let indent = format!("{}px", 12 + depth * 14);

    if entry.children.is_empty() {
        let navigate = use_navigate();
        let path = entry.path.as_deref();
        view! {
            <li
                class="side-menu__item"
                class:side-menu__item--active=move || {
                    id.map(|item| nav.is_selected(item)).unwrap_or(false)
                }
                style:padding-left=indent
                on:click=move |_| {
                    if let Some(path) = path {
                        navigate(path, Default::default());
                    }
                }
            >
                {entry.display.icon.as_deref().map(icon)}
                <span class="side-menu__label">{label}</span>
            </li>
        }
        .into_any()
    } else {
        let branch_id = id.unwrap_or_default();
        view! {
            <li class="side-menu__group">
                <div
                    class="side-menu__item"
                    style:padding-left=indent
                    on:click=move |_| nav.toggle_branch(branch_id)
                >
                    {entry.display.icon.as_deref().map(icon)}
                    <span class="side-menu__label">{label}</span>
                    <span
                        class="side-menu__chevron"
                        class:side-menu__chevron--open=move || nav.is_expanded(branch_id)
                    >
                        {icon("chevron-right")}
                    </span>
                </div>
                <Show when=move || nav.is_expanded(branch_id)>
                    <ul class="side-menu__children">
                        {entry
                            .children
                            .iter()
                            .map(|child| entry_view(child, nav, depth + 1))
                            .collect_view()}
                    </ul>
                </Show>
            </li>
        }
        .into_any()
    }
}
