//! Item List
//!
//! Ordered entries of one checklist and the operations that reshape them.
//! Invalid requests (unknown id, empty text, wrong entry kind) leave the list
//! untouched and report `false`.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SECTION_LABEL;
use crate::models::{Entry, EntryId, IndentDirection};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList(Vec<Entry>);

impl ItemList {
    #[cfg(test)]
    pub fn new(entries: Vec<Entry>) -> Self {
        Self(entries)
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[Entry] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.0.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.0.iter().find(|e| e.id() == id)
    }

    fn index_of(&self, id: EntryId) -> Option<usize> {
        self.0.iter().position(|e| e.id() == id)
    }

    /// Number of checkable items (sections excluded)
    pub fn item_count(&self) -> usize {
        self.0.iter().filter(|e| !e.is_section()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|e| e.is_completed()).count()
    }

    /// Append a new unchecked item. Blank text is rejected.
    pub fn add_item(&mut self, id: EntryId, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.0.push(Entry::item(id, text));
        true
    }

    /// Append a section header with the default label
    pub fn add_section(&mut self, id: EntryId) {
        self.0.push(Entry::section(id, DEFAULT_SECTION_LABEL));
    }

    pub fn toggle(&mut self, id: EntryId) -> bool {
        match self.0.iter_mut().find(|e| e.id() == id) {
            Some(Entry::Item { completed, .. }) => {
                *completed = !*completed;
                true
            }
            _ => false,
        }
    }

    pub fn delete(&mut self, id: EntryId) -> bool {
        let before = self.0.len();
        self.0.retain(|e| e.id() != id);
        self.0.len() != before
    }

    /// Commit edited text. Blank or unchanged text keeps the current value.
    pub fn rename_text(&mut self, id: EntryId, new_text: &str) -> bool {
        if new_text.trim().is_empty() {
            return false;
        }
        match self.0.iter_mut().find(|e| e.id() == id) {
            Some(entry) if entry.text() != new_text => {
                *entry.text_mut() = new_text.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn indent(&mut self, id: EntryId, direction: IndentDirection) -> bool {
        match self.0.iter_mut().find(|e| e.id() == id) {
            Some(Entry::Item { indentation, .. }) => {
                let shifted = indentation.shifted(direction);
                let changed = shifted != *indentation;
                *indentation = shifted;
                changed
            }
            _ => false,
        }
    }

    /// Move `source_id` to the index currently held by `target_id`
    pub fn reorder(&mut self, source_id: EntryId, target_id: EntryId) -> bool {
        if source_id == target_id {
            return false;
        }
        let (Some(from), Some(to)) = (self.index_of(source_id), self.index_of(target_id)) else {
            return false;
        };
        let entry = self.0.remove(from);
        self.0.insert(to, entry);
        true
    }

    /// A separator belongs between `index` and `index + 1` when their kinds differ
    pub fn is_boundary_after(&self, index: usize) -> bool {
        match (self.0.get(index), self.0.get(index + 1)) {
            (Some(a), Some(b)) => a.kind() != b.kind(),
            _ => false,
        }
    }

    /// Whether the entry with `id` is followed by a separator
    pub fn is_boundary_after_id(&self, id: EntryId) -> bool {
        self.index_of(id).is_some_and(|i| self.is_boundary_after(i))
    }

    /// Every index followed by a separator
    #[cfg(test)]
    pub fn boundaries(&self) -> Vec<usize> {
        (0..self.0.len()).filter(|&i| self.is_boundary_after(i)).collect()
    }
}
