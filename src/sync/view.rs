use crate::error::KioskError;
use crate::records::Editable;
use crate::sync::bulk::DeleteGate;
use crate::sync::edit::EditSession;
use crate::sync::filter::{project, Searchable};
use crate::sync::live::{Applied, LiveCollection};
use crate::sync::selection::SelectionSet;

/// Everything one CRUD screen owns: the fetched collection, the search box,
/// the bulk selection, the edit form and the delete gate.
#[derive(Debug, Clone)]
pub struct CollectionView<R: Editable> {
    pub live: LiveCollection<R>,
    pub query: String,
    pub selection: SelectionSet,
    pub editor: EditSession<R>,
    pub deletes: DeleteGate,
}

impl<R: Editable> Default for CollectionView<R> {
    fn default() -> Self {
        Self {
            live: LiveCollection::new(),
            query: String::new(),
            selection: SelectionSet::new(),
            editor: EditSession::new(),
            deletes: DeleteGate::new(),
        }
    }
}

impl<R: Editable + Searchable> CollectionView<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the screen. The selection never survives a view change.
    pub fn mount(&mut self) -> u64 {
        self.selection.clear();
        self.live.mount()
    }

    pub fn detach(&mut self) {
        self.selection.clear();
        self.deletes.dismiss();
        self.live.detach();
    }

    pub fn visible(&self) -> Vec<&R> {
        project(self.live.items(), &self.query)
    }

    pub fn visible_keys(&self) -> Vec<&str> {
        self.visible().into_iter().map(|record| record.key()).collect()
    }

    pub fn toggle_all(&mut self) {
        let keys: Vec<String> = self.visible_keys().into_iter().map(str::to_string).collect();
        self.selection.toggle_all(keys.iter().map(String::as_str));
    }

    pub fn all_selected(&self) -> bool {
        self.selection.is_all_selected(self.visible_keys())
    }

    pub fn apply_fetch(&mut self, ticket: u64, result: Result<Vec<R>, KioskError>) -> Applied {
        let applied = self.live.apply(ticket, result);
        if applied == Applied::Replaced {
            self.selection.clear();
        }
        applied
    }

    /// Bulk or single delete acknowledged by the server.
    pub fn delete_succeeded(&mut self) {
        self.deletes.finish();
        self.selection.clear();
    }

    pub fn delete_failed(&mut self) {
        self.deletes.finish();
    }
}
