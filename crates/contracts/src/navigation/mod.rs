//! Navigation model: the static menu tree and the resolver that derives
//! selection, expansion and breadcrumb state from a route path.

pub mod resolver;

pub use resolver::{derive_breadcrumb, resolve_deepest_match, Crumb, ResolvedLocation};

use std::collections::HashSet;

use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// Presentation metadata for a menu entry. The resolver never looks at this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDisplay {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One node of the navigation tree.
///
/// The tree is configuration, not state: it is built once per session and
/// never mutated. `id` is unique across the whole tree, not just among
/// siblings, because selection and expansion are tracked by flat id sets.
/// Entries without a `path` are pure grouping nodes; entries without an `id`
/// are traversed but never appear in a match chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(flatten)]
    pub display: MenuDisplay,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    pub fn leaf(id: &str, label: &str, path: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            path: Some(path.to_string()),
            display: MenuDisplay {
                label: label.to_string(),
                icon: None,
            },
            children: Vec::new(),
        }
    }

    pub fn group(id: &str, label: &str, path: &str, children: Vec<MenuEntry>) -> Self {
        Self {
            children,
            ..Self::leaf(id, label, path)
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.display.icon = Some(icon.to_string());
        self
    }

    pub fn label(&self) -> &str {
        &self.display.label
    }
}

/// Checks the invariant the flat selection/expansion sets rely on: every id
/// in the tree is globally unique. Cycles are an unchecked precondition and
/// are not detected here.
pub fn validate_tree(tree: &[MenuEntry]) -> anyhow::Result<()> {
    fn collect<'t>(nodes: &'t [MenuEntry], seen: &mut HashSet<&'t str>) -> anyhow::Result<()> {
        for node in nodes {
            if let Some(id) = node.id.as_deref() {
                ensure!(seen.insert(id), "duplicate menu id: {id}");
            }
            collect(&node.children, seen)?;
        }
        Ok(())
    }
    collect(tree, &mut HashSet::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_unique_ids() {
        let tree = vec![
            MenuEntry::leaf("a", "A", "/a"),
            MenuEntry::group("b", "B", "/b", vec![MenuEntry::leaf("c", "C", "/c")]),
        ];
        assert!(validate_tree(&tree).is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_ids_across_branches() {
        let tree = vec![
            MenuEntry::group("a", "A", "/a", vec![MenuEntry::leaf("x", "X", "/x")]),
            MenuEntry::group("b", "B", "/b", vec![MenuEntry::leaf("x", "X2", "/x2")]),
        ];
        let err = validate_tree(&tree).unwrap_err();
        assert!(err.to_string().contains("duplicate menu id: x"));
    }
}
