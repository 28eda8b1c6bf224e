//! Inline Entry Editing
//!
//! Transient per-row edit state. Nothing here is stored in the checklist;
//! a committed draft goes through [`ItemList::rename_text`].

use crate::item_list::ItemList;
use crate::models::{Entry, EntryId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { draft: String },
}

impl EditState {
    /// Enter edit mode with the entry's current text. Completed items stay read-only.
    pub fn begin(entry: &Entry) -> Option<Self> {
        if entry.is_completed() {
            return None;
        }
        Some(EditState::Editing { draft: entry.text().to_string() })
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditState::Editing { draft } => Some(draft),
            EditState::Viewing => None,
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditState::Editing { draft } = self {
            *draft = text.into();
        }
    }

    /// Leave edit mode, applying the draft to `items` (Enter or blur).
    /// Returns whether the list changed.
    pub fn commit(&mut self, items: &mut ItemList, id: EntryId) -> bool {
        match std::mem::take(self) {
            EditState::Editing { draft } => items.rename_text(id, &draft),
            EditState::Viewing => false,
        }
    }

    /// Leave edit mode, dropping the draft (Escape)
    pub fn cancel(&mut self) {
        *self = EditState::Viewing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_list() -> ItemList {
        ItemList::new(vec![Entry::item(1, "Fuel"), Entry::section(2, "Engine")])
    }

    #[test]
    fn test_completed_item_cannot_be_edited() {
        let mut list = make_list();
        list.toggle(1);
        assert_eq!(EditState::begin(list.get(1).unwrap()), None);
    }

    #[test]
    fn test_commit_applies_draft() {
        let mut list = make_list();
        let mut state = EditState::begin(list.get(2).unwrap()).unwrap();
        assert_eq!(state.draft(), Some("Engine"));
        state.set_draft("Cabin");
        assert!(state.commit(&mut list, 2));
        assert_eq!(state, EditState::Viewing);
        assert_eq!(list.get(2).unwrap().text(), "Cabin");
    }

    #[test]
    fn test_empty_draft_reverts() {
        let mut list = make_list();
        let mut state = EditState::begin(list.get(1).unwrap()).unwrap();
        state.set_draft("  ");
        assert!(!state.commit(&mut list, 1));
        assert!(!state.is_editing());
        assert_eq!(list, make_list());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let list = make_list();
        let mut state = EditState::begin(list.get(1).unwrap()).unwrap();
        state.set_draft("Flaps");
        state.cancel();
        assert_eq!(state.draft(), None);
        assert_eq!(list, make_list());
    }

    #[test]
    fn test_set_draft_while_viewing_is_ignored() {
        let mut state = EditState::Viewing;
        state.set_draft("x");
        assert_eq!(state, EditState::Viewing);
    }
}
