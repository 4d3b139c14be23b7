//! Pure resolver from `(tree, current path)` to navigation state.
//!
//! Invoked once per navigation event by the side menu and the breadcrumb.
//! Absence of a match is a normal output (empty chain), never an error.

use super::MenuEntry;

/// Deepest exact match for `target_path`, as the full ancestor chain from a
/// root-level entry down to the matched entry inclusive.
///
/// Depth-first in sibling order, each node tested before its children. Only
/// exact path equality matches. When the same path occurs more than once in
/// the tree, the match with the longer chain wins; at equal length the one
/// discovered first is kept. Entries without an id are traversed but never
/// enter the chain.
///
/// Returns an empty vec when `target_path` occurs nowhere in the tree.
pub fn resolve_deepest_match<'t>(tree: &'t [MenuEntry], target_path: &str) -> Vec<&'t MenuEntry> {
    let mut best = Vec::new();
    let mut trail = Vec::new();
    walk(tree, target_path, &mut trail, &mut best);
    best
}

fn walk<'t>(
    nodes: &'t [MenuEntry],
    target: &str,
    trail: &mut Vec<&'t MenuEntry>,
    best: &mut Vec<&'t MenuEntry>,
) {
    for node in nodes {
        let in_chain = node.id.is_some();
        if in_chain {
            trail.push(node);
        }
        if node.path.as_deref() == Some(target) && trail.len() > best.len() {
            *best = trail.clone();
        }
        walk(&node.children, target, trail, best);
        if in_chain {
            trail.pop();
        }
    }
}

/// Navigation state derived from one route path. Borrows the static tree;
/// recomputed from scratch on every navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation<'t> {
    pub match_chain: Vec<&'t MenuEntry>,
}

impl<'t> ResolvedLocation<'t> {
    pub fn resolve(tree: &'t [MenuEntry], target_path: &str) -> Self {
        Self {
            match_chain: resolve_deepest_match(tree, target_path),
        }
    }

    pub fn is_match(&self) -> bool {
        !self.match_chain.is_empty()
    }

    /// Id of the matched entry, i.e. the last element of the chain.
    pub fn selected_id(&self) -> Option<&'t str> {
        self.match_chain.last().and_then(|entry| entry.id.as_deref())
    }

    /// Ids of the strict ancestors of the matched entry. The matched entry
    /// itself is never included. Merging these with branches the user opened
    /// by hand is the caller's policy, not the resolver's.
    pub fn expanded_ids(&self) -> Vec<&'t str> {
        let ancestors = self.match_chain.len().saturating_sub(1);
        self.match_chain[..ancestors]
            .iter()
            .filter_map(|entry| entry.id.as_deref())
            .collect()
    }

    pub fn breadcrumb(&self, root_label: &str, root_path: &str) -> Vec<Crumb> {
        derive_breadcrumb(&self.match_chain, root_label, root_path)
    }
}

/// One rendered segment of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub path: Option<String>,
    pub is_terminal: bool,
}

/// Breadcrumb sequence for a match chain. The fixed root crumb comes first
/// regardless of match; one crumb follows per chain entry. The final crumb
/// is flagged terminal so the surface renders it as plain text instead of a
/// link. An empty chain yields the root crumb alone.
pub fn derive_breadcrumb(chain: &[&MenuEntry], root_label: &str, root_path: &str) -> Vec<Crumb> {
    let mut crumbs = Vec::with_capacity(chain.len() + 1);
    crumbs.push(Crumb {
        label: root_label.to_string(),
        path: Some(root_path.to_string()),
        is_terminal: chain.is_empty(),
    });
    for (index, entry) in chain.iter().enumerate() {
        crumbs.push(Crumb {
            label: entry.label().to_string(),
            path: entry.path.clone(),
            is_terminal: index + 1 == chain.len(),
        });
    }
    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{MenuDisplay, MenuEntry};

    fn sample_tree() -> Vec<MenuEntry> {
        vec![
            MenuEntry::leaf("home", "首页", "/home"),
            MenuEntry::group(
                "goods",
                "商品管理",
                "/goodsList",
                vec![
                    MenuEntry::leaf("goods-list", "商品列表", "/goodsList"),
                    MenuEntry::leaf("goods-add", "添加商品", "/goodsAdd"),
                ],
            ),
        ]
    }

    fn ids(chain: &[&MenuEntry]) -> Vec<String> {
        chain
            .iter()
            .filter_map(|entry| entry.id.clone())
            .collect()
    }

    #[test]
    fn unique_path_yields_full_ancestor_chain() {
        let tree = sample_tree();
        let chain = resolve_deepest_match(&tree, "/goodsAdd");
        assert_eq!(ids(&chain), vec!["goods", "goods-add"]);
        assert_eq!(chain.last().unwrap().path.as_deref(), Some("/goodsAdd"));
    }

    #[test]
    fn missing_path_yields_empty_chain_and_root_only_breadcrumb() {
        let tree = sample_tree();
        let location = ResolvedLocation::resolve(&tree, "/unknown");
        assert!(!location.is_match());
        assert_eq!(location.selected_id(), None);
        assert!(location.expanded_ids().is_empty());

        let crumbs = location.breadcrumb("首页", "/home");
        assert_eq!(crumbs.len(), 1);
        assert_eq!(crumbs[0].label, "首页");
        assert!(crumbs[0].is_terminal);
    }

    #[test]
    fn resolution_is_idempotent() {
        let tree = sample_tree();
        let first = resolve_deepest_match(&tree, "/goodsList");
        let second = resolve_deepest_match(&tree, "/goodsList");
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_path_prefers_deepest_match() {
        // "/x" at depth 1 and again at depth 3 in another branch.
        let tree = vec![
            MenuEntry::leaf("shallow", "Shallow", "/x"),
            MenuEntry::group(
                "outer",
                "Outer",
                "/outer",
                vec![MenuEntry::group(
                    "inner",
                    "Inner",
                    "/inner",
                    vec![MenuEntry::leaf("deep", "Deep", "/x")],
                )],
            ),
        ];
        let chain = resolve_deepest_match(&tree, "/x");
        assert_eq!(ids(&chain), vec!["outer", "inner", "deep"]);
    }

    #[test]
    fn equal_depth_duplicate_keeps_first_discovered() {
        let tree = vec![
            MenuEntry::group("a", "A", "/a", vec![MenuEntry::leaf("a-y", "AY", "/y")]),
            MenuEntry::group("b", "B", "/b", vec![MenuEntry::leaf("b-y", "BY", "/y")]),
        ];
        let chain = resolve_deepest_match(&tree, "/y");
        assert_eq!(ids(&chain), vec!["a", "a-y"]);
    }

    #[test]
    fn group_path_shared_with_first_child_resolves_to_child() {
        let tree = sample_tree();
        let location = ResolvedLocation::resolve(&tree, "/goodsList");
        assert_eq!(location.selected_id(), Some("goods-list"));
    }

    #[test]
    fn expansion_contains_strict_ancestors_only() {
        let tree = sample_tree();
        let location = ResolvedLocation::resolve(&tree, "/goodsAdd");
        assert_eq!(location.expanded_ids(), vec!["goods"]);
        assert!(!location.expanded_ids().contains(&"goods-add"));
    }

    #[test]
    fn entries_without_id_are_traversed_but_skipped_in_chain() {
        let heading = MenuEntry {
            id: None,
            path: None,
            display: MenuDisplay {
                label: "Section".to_string(),
                icon: None,
            },
            children: vec![MenuEntry::leaf("inside", "Inside", "/inside")],
        };
        let binding = [heading];
        let chain = resolve_deepest_match(&binding, "/inside");
        assert_eq!(ids(&chain), vec!["inside"]);
    }

    #[test]
    fn concrete_goods_add_scenario() {
        let tree = sample_tree();
        let location = ResolvedLocation::resolve(&tree, "/goodsAdd");
        assert_eq!(location.selected_id(), Some("goods-add"));
        assert_eq!(location.expanded_ids(), vec!["goods"]);

        let crumbs = location.breadcrumb("首页", "/home");
        let labels: Vec<_> = crumbs.iter().map(|crumb| crumb.label.as_str()).collect();
        assert_eq!(labels, vec!["首页", "商品管理", "添加商品"]);
        assert!(crumbs[2].is_terminal);
        assert!(!crumbs[1].is_terminal);
        assert_eq!(crumbs[2].path.as_deref(), Some("/goodsAdd"));
    }
}
