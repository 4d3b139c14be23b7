use contracts::navigation::ResolvedLocation;
use leptos::prelude::*;

use super::menu;

/// Session-scoped navigation UI state: which entry is highlighted and which
/// branches are open. Selection is replaced on every navigation; expansion
/// is a union, so branches the user opened by hand stay open.
#[derive(Clone, Copy)]
pub struct NavContext {
    pub selected: RwSignal<Option<String>>,
    pub expanded: RwSignal<Vec<String>>,
    pub sidebar_open: RwSignal<bool>,
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(None),
            expanded: RwSignal::new(Vec::new()),
            sidebar_open: RwSignal::new(true),
        }
    }

    /// Re-derives selection and expansion from a route path.
    pub fn sync_to_path(&self, path: &str) {
        let location = ResolvedLocation::resolve(menu::menu_tree(), path);
        self.selected
            .set(location.selected_id().map(str::to_string));
        let ancestors = location.expanded_ids();
        if !ancestors.is_empty() {
            self.expanded.update(|open| merge_expanded(open, &ancestors));
        }
    }

    /// Manual open/close of a branch from the side menu.
    pub fn toggle_branch(&self, id: &str) {
        self.expanded.update(|open| {
            if let Some(position) = open.iter().position(|x| x == id) {
                open.remove(position);
            } else {
                open.push(id.to_string());
            }
        });
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.get().as_deref() == Some(id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.with(|open| open.iter().any(|x| x == id))
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

impl Default for NavContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Union merge: freshly derived ancestors join the open set, nothing closes.
pub fn merge_expanded(open: &mut Vec<String>, ancestors: &[&str]) {
    for id in ancestors {
        if !open.iter().any(|x| x == id) {
            open.push((*id).to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_manually_opened_branches() {
        let mut open = vec!["goods".to_string()];
        merge_expanded(&mut open, &["account"]);
        assert_eq!(open, vec!["goods", "account"]);
    }

    #[test]
    fn merge_does_not_duplicate() {
        let mut open = vec!["account".to_string()];
        merge_expanded(&mut open, &["account"]);
        assert_eq!(open, vec!["account"]);
    }

    #[test]
    fn merge_with_no_ancestors_is_a_no_op() {
        let mut open = vec!["statistics".to_string()];
        merge_expanded(&mut open, &[]);
        assert_eq!(open, vec!["statistics"]);
    }
}
