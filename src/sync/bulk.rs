use crate::sync::selection::SelectionSet;

/// A destructive request waiting on the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDelete {
    One(String),
    /// Always sent as a single bulk request.
    Many(Vec<String>),
}

impl PendingDelete {
    pub fn count(&self) -> usize {
        match self {
            PendingDelete::One(_) => 1,
            PendingDelete::Many(keys) => keys.len(),
        }
    }
}

/// Confirmation gate in front of delete calls.
#[derive(Debug, Clone, Default)]
pub struct DeleteGate {
    staged: Option<PendingDelete>,
    in_flight: bool,
}

impl DeleteGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages the current selection. Returns `false` (and stages nothing)
    /// when the selection is empty or a delete is already running.
    pub fn request_selected(&mut self, selection: &SelectionSet) -> bool {
        if selection.is_empty() || self.in_flight {
            return false;
        }
        self.staged = Some(PendingDelete::Many(selection.keys()));
        true
    }

    pub fn request_one(&mut self, key: &str) -> bool {
        if self.in_flight {
            return false;
        }
        self.staged = Some(PendingDelete::One(key.to_string()));
        true
    }

    pub fn staged(&self) -> Option<&PendingDelete> {
        self.staged.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Releases the staged delete once.
    pub fn confirm(&mut self) -> Option<PendingDelete> {
        let pending = self.staged.take()?;
        self.in_flight = true;
        Some(pending)
    }

    pub fn dismiss(&mut self) {
        self.staged = None;
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_a_no_op() {
        let mut gate = DeleteGate::new();
        assert!(!gate.request_selected(&SelectionSet::new()));
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn selection_is_released_once_after_confirmation() {
        let mut selection = SelectionSet::new();
        selection.toggle("S2");
        selection.toggle("S1");
        let mut gate = DeleteGate::new();
        assert!(gate.request_selected(&selection));
        assert_eq!(gate.staged().map(PendingDelete::count), Some(2));
        assert_eq!(gate.confirm(), Some(PendingDelete::Many(vec!["S1".into(), "S2".into()])));
        assert_eq!(gate.confirm(), None);
        assert!(gate.is_in_flight());
        gate.finish();
        assert!(!gate.is_in_flight());
    }

    #[test]
    fn dismiss_sends_nothing() {
        let mut gate = DeleteGate::new();
        gate.request_one("T1");
        gate.dismiss();
        assert_eq!(gate.confirm(), None);
        assert!(!gate.is_in_flight());
    }

    #[test]
    fn no_new_request_while_in_flight() {
        let mut gate = DeleteGate::new();
        gate.request_one("T1");
        gate.confirm();
        assert!(!gate.request_one("T2"));
    }
}
