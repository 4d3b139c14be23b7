//! Breadcrumb trail fed by the resolver. Non-terminal crumbs are links; the
//! terminal crumb renders as plain text.

use contracts::navigation::{derive_breadcrumb, Crumb, ResolvedLocation};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::layout::menu::{menu_tree, HOME_LABEL, HOME_PATH};

/// The root crumb already points at the home route, so chain entries that
/// would duplicate it are dropped before deriving the trail.
fn crumbs_for(path: &str) -> Vec<Crumb> {
    let resolved = ResolvedLocation::resolve(menu_tree(), path);
    let chain: Vec<_> = resolved
        .match_chain
        .iter()
        .copied()
        .filter(|entry| entry.path.as_deref() != Some(HOME_PATH))
        .collect();
    derive_breadcrumb(&chain, HOME_LABEL, HOME_PATH)
}

#[component]
pub fn Breadcrumb() -> impl IntoView {
    let location = use_location();
    let crumbs = Memo::new(move |_| crumbs_for(&location.pathname.get()));

    view! {
        <nav class="breadcrumb">
            {move || {
                crumbs
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, crumb)| {
                        let Crumb { label, path, is_terminal } = crumb;
                        let separator = (index > 0)
                            .then(|| view! { <span class="breadcrumb__sep">"/"</span> });
                        let inner = if is_terminal {
                            view! { <span class="breadcrumb__current">{label}</span> }
                                .into_any()
                        } else {
                            let href = path.unwrap_or_else(|| HOME_PATH.to_string());
                            view! { <A href=href>{label}</A> }.into_any()
                        };
                        view! {
                            <span class="breadcrumb__crumb">
                                {separator}
                                {inner}
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_route_shows_a_single_terminal_root() {
        let crumbs = crumbs_for(HOME_PATH);
        assert_eq!(crumbs.len(), 1);
        assert_eq!(crumbs[0].label, HOME_LABEL);
        assert!(crumbs[0].is_terminal);
    }

    #[test]
    fn nested_route_links_everything_but_the_last_crumb() {
        let crumbs = crumbs_for("/goodsAdd");
        let labels: Vec<_> = crumbs.iter().map(|crumb| crumb.label.as_str()).collect();
        assert_eq!(labels, vec!["首页", "商品管理", "添加商品"]);
        assert!(!crumbs[0].is_terminal);
        assert!(crumbs.last().unwrap().is_terminal);
    }

    #[test]
    fn unknown_route_falls_back_to_the_root_crumb() {
        let crumbs = crumbs_for("/goodsEdit/42");
        assert_eq!(crumbs.len(), 1);
        assert!(crumbs[0].is_terminal);
    }
}
