use std::collections::BTreeSet;

/// Primary keys marked for a bulk operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    keys: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, key: &str) {
        if !self.keys.remove(key) {
            self.keys.insert(key.to_string());
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Single select-all control: selects exactly `visible` unless all of it
    /// is already selected, in which case the selection is cleared.
    pub fn toggle_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a str>) {
        let visible: BTreeSet<String> = visible.into_iter().map(str::to_string).collect();
        if !visible.is_empty() && self.keys == visible {
            self.keys.clear();
        } else {
            self.keys = visible;
        }
    }

    pub fn is_all_selected<'a>(&self, visible: impl IntoIterator<Item = &'a str>) -> bool {
        let mut count = 0;
        for key in visible {
            if !self.keys.contains(key) {
                return false;
            }
            count += 1;
        }
        count > 0 && count == self.keys.len()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.keys.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut selection = SelectionSet::new();
        selection.toggle("S1");
        assert!(selection.contains("S1"));
        selection.toggle("S1");
        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_twice_returns_to_empty() {
        let visible = ["S1", "S2", "S3"];
        let mut selection = SelectionSet::new();
        selection.toggle_all(visible);
        assert_eq!(selection.keys(), vec!["S1", "S2", "S3"]);
        assert!(selection.is_all_selected(visible));
        selection.toggle_all(visible);
        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_is_scoped_to_the_filtered_view() {
        let mut selection = SelectionSet::new();
        selection.toggle("S9");
        selection.toggle_all(["S1", "S2"]);
        assert_eq!(selection.keys(), vec!["S1", "S2"]);
    }

    #[test]
    fn partial_selection_is_completed_not_cleared() {
        let mut selection = SelectionSet::new();
        selection.toggle("S1");
        assert!(!selection.is_all_selected(["S1", "S2"]));
        selection.toggle_all(["S1", "S2"]);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn empty_view_is_never_all_selected() {
        let mut selection = SelectionSet::new();
        assert!(!selection.is_all_selected([]));
        selection.toggle_all([]);
        assert!(selection.is_empty());
    }
}
