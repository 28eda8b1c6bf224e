//! Checklist Workspace
//!
//! Owns the one to three checklists shown side by side on the page.

use crate::config::MAX_CHECKLISTS;
use crate::item_list::ItemList;
use crate::models::{Checklist, ChecklistId, ChecklistType, EntryId};

/// Page layout, derived from the number of checklists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Portrait,
    Landscape,
}

impl LayoutMode {
    pub fn for_count(count: usize) -> Self {
        if count > 1 {
            LayoutMode::Landscape
        } else {
            LayoutMode::Portrait
        }
    }

    pub fn is_landscape(self) -> bool {
        self == LayoutMode::Landscape
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Portrait => "portrait",
            LayoutMode::Landscape => "landscape",
        }
    }

    /// Page class consumed by the stylesheet
    pub fn page_class(self) -> &'static str {
        match self {
            LayoutMode::Portrait => "a4-page a4-portrait",
            LayoutMode::Landscape => "a4-page a4-landscape",
        }
    }
}

/// Partial checklist update; `None` fields are left as they are
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistPatch {
    pub title: Option<String>,
    pub checklist_type: Option<ChecklistType>,
    pub context: Option<String>,
    pub items: Option<ItemList>,
    pub created_by: Option<String>,
    pub completed_by: Option<String>,
}

impl ChecklistPatch {
    pub fn items(items: ItemList) -> Self {
        Self { items: Some(items), ..Default::default() }
    }

    /// Shallow merge into `checklist`
    fn apply(self, checklist: &mut Checklist) {
        if let Some(title) = self.title {
            checklist.title = title;
        }
        if let Some(checklist_type) = self.checklist_type {
            checklist.checklist_type = checklist_type;
        }
        if let Some(context) = self.context {
            checklist.context = context;
        }
        if let Some(items) = self.items {
            checklist.items = items;
        }
        if let Some(created_by) = self.created_by {
            checklist.created_by = created_by;
        }
        if let Some(completed_by) = self.completed_by {
            checklist.completed_by = completed_by;
        }
    }
}

/// Hands out ids for checklists and entries, never repeating within a session
#[derive(Debug, Clone, Default)]
struct IdAllocator {
    last: u32,
}

impl IdAllocator {
    fn next(&mut self) -> u32 {
        self.last += 1;
        self.last
    }
}

#[derive(Debug, Clone)]
pub struct Workspace {
    checklists: Vec<Checklist>,
    ids: IdAllocator,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Workspace with a single blank checklist
    pub fn new() -> Self {
        let mut ids = IdAllocator::default();
        let first = Checklist::new(ids.next());
        Self { checklists: vec![first], ids }
    }

    pub fn checklists(&self) -> &[Checklist] {
        &self.checklists
    }

    pub fn checklist(&self, id: ChecklistId) -> Option<&Checklist> {
        self.checklists.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.checklists.len()
    }

    pub fn can_add(&self) -> bool {
        self.checklists.len() < MAX_CHECKLISTS
    }

    pub fn can_remove(&self) -> bool {
        self.checklists.len() > 1
    }

    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::for_count(self.checklists.len())
    }

    /// Fresh id for a new entry
    pub fn allocate_id(&mut self) -> EntryId {
        self.ids.next()
    }

    /// Append a blank checklist unless the workspace is full
    pub fn add_checklist(&mut self) -> Option<ChecklistId> {
        if !self.can_add() {
            tracing::debug!(count = self.len(), "add checklist ignored, workspace full");
            return None;
        }
        let id = self.ids.next();
        self.checklists.push(Checklist::new(id));
        tracing::info!(id, count = self.len(), "checklist added");
        Some(id)
    }

    /// Remove a checklist unless it is the last one
    pub fn remove_checklist(&mut self, id: ChecklistId) -> bool {
        if !self.can_remove() {
            tracing::debug!(id, "remove ignored, last checklist");
            return false;
        }
        let before = self.checklists.len();
        self.checklists.retain(|c| c.id != id);
        let removed = self.checklists.len() != before;
        if removed {
            tracing::info!(id, count = self.len(), "checklist removed");
        }
        removed
    }

    /// Merge `patch` into the checklist with `id`
    pub fn update_checklist(&mut self, id: ChecklistId, patch: ChecklistPatch) -> bool {
        match self.checklists.iter_mut().find(|c| c.id == id) {
            Some(checklist) => {
                patch.apply(checklist);
                true
            }
            None => {
                tracing::warn!(id, "update for unknown checklist");
                false
            }
        }
    }

    /// Append an item with a fresh id. `None` for blank text or an unknown checklist.
    pub fn add_item(&mut self, id: ChecklistId, text: &str) -> Option<EntryId> {
        let entry_id = self.allocate_id();
        self.edit_items(id, |items| items.add_item(entry_id, text)).then_some(entry_id)
    }

    /// Append a default section with a fresh id
    pub fn add_section(&mut self, id: ChecklistId) -> Option<EntryId> {
        let entry_id = self.allocate_id();
        self.edit_items(id, |items| {
            items.add_section(entry_id);
            true
        })
        .then_some(entry_id)
    }

    /// Run an item operation on a copy of the checklist's entries and store
    /// the result through [`Workspace::update_checklist`]. Returns what `f` returned.
    pub fn edit_items<F>(&mut self, id: ChecklistId, f: F) -> bool
    where
        F: FnOnce(&mut ItemList) -> bool,
    {
        let Some(checklist) = self.checklist(id) else {
            return false;
        };
        let mut items = checklist.items.clone();
        if !f(&mut items) {
            return false;
        }
        self.update_checklist(id, ChecklistPatch::items(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IndentDirection;

    #[test]
    fn test_starts_with_one_portrait_checklist() {
        let ws = Workspace::new();
        assert_eq!(ws.len(), 1);
        assert_eq!(ws.layout_mode(), LayoutMode::Portrait);
        assert!(ws.can_add());
        assert!(!ws.can_remove());
    }

    #[test]
    fn test_add_stops_at_three() {
        let mut ws = Workspace::new();
        for _ in 0..5 {
            ws.add_checklist();
        }
        assert_eq!(ws.len(), 3);
        assert!(!ws.can_add());
        assert_eq!(ws.add_checklist(), None);
        assert_eq!(ws.layout_mode(), LayoutMode::Landscape);
    }

    #[test]
    fn test_last_checklist_cannot_be_removed() {
        let mut ws = Workspace::new();
        let only = ws.checklists()[0].id;
        assert!(!ws.remove_checklist(only));
        assert_eq!(ws.len(), 1);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut ws = Workspace::new();
        let first = ws.checklists()[0].id;
        let second = ws.add_checklist().unwrap();
        let third = ws.add_checklist().unwrap();
        assert!(ws.remove_checklist(second));
        let ids: Vec<_> = ws.checklists().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first, third]);
        assert!(!ws.remove_checklist(second));
        assert_eq!(ws.layout_mode(), LayoutMode::Landscape);
        ws.remove_checklist(third);
        assert_eq!(ws.layout_mode(), LayoutMode::Portrait);
    }

    #[test]
    fn test_checklist_ids_unique() {
        let mut ws = Workspace::new();
        let a = ws.add_checklist().unwrap();
        ws.remove_checklist(a);
        let b = ws.add_checklist().unwrap();
        assert_ne!(a, b);
        assert_ne!(ws.checklists()[0].id, b);
    }

    #[test]
    fn test_update_merges_only_given_fields() {
        let mut ws = Workspace::new();
        let id = ws.checklists()[0].id;
        let patch = ChecklistPatch {
            title: Some("Before takeoff".into()),
            checklist_type: Some(ChecklistType::ReadDo),
            ..Default::default()
        };
        assert!(ws.update_checklist(id, patch));
        let c = ws.checklist(id).unwrap();
        assert_eq!(c.title, "Before takeoff");
        assert_eq!(c.checklist_type, ChecklistType::ReadDo);
        assert_eq!(c.context, "");

        let patch = ChecklistPatch { created_by: Some("Ops".into()), ..Default::default() };
        ws.update_checklist(id, patch);
        assert_eq!(ws.checklist(id).unwrap().title, "Before takeoff");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut ws = Workspace::new();
        assert!(!ws.update_checklist(42, ChecklistPatch { title: Some("x".into()), ..Default::default() }));
        assert_eq!(ws.checklists()[0].title, crate::config::DEFAULT_TITLE);
    }

    #[test]
    fn test_edit_items_replaces_snapshot() {
        let mut ws = Workspace::new();
        let id = ws.checklists()[0].id;
        let entry_id = ws.allocate_id();
        assert!(ws.edit_items(id, |items| items.add_item(entry_id, "Check oil")));
        assert!(ws.edit_items(id, |items| items.indent(entry_id, IndentDirection::Increase)));
        assert!(!ws.edit_items(id, |items| items.add_item(99, "")));
        let items = &ws.checklist(id).unwrap().items;
        assert_eq!(items.len(), 1);
        assert_eq!(items.get(entry_id).unwrap().display_indentation(), 1);
    }

    #[test]
    fn test_entry_ids_do_not_collide_with_checklists() {
        let mut ws = Workspace::new();
        let entry = ws.allocate_id();
        let checklist = ws.add_checklist().unwrap();
        assert_ne!(entry, checklist);
        assert_ne!(entry, ws.checklists()[0].id);
    }

    #[test]
    fn test_add_item_and_section_allocate_fresh_ids() {
        let mut ws = Workspace::new();
        let id = ws.checklists()[0].id;
        let first = ws.add_item(id, "Check oil").unwrap();
        let section = ws.add_section(id).unwrap();
        let second = ws.add_item(id, "Check fuel").unwrap();
        assert_ne!(first, section);
        assert_ne!(section, second);

        let items = &ws.checklist(id).unwrap().items;
        let ids: Vec<_> = items.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![first, section, second]);
        assert_eq!(items.get(section).unwrap().text(), crate::config::DEFAULT_SECTION_LABEL);
    }

    #[test]
    fn test_add_item_rejects_blank_and_unknown_checklist() {
        let mut ws = Workspace::new();
        let id = ws.checklists()[0].id;
        assert_eq!(ws.add_item(id, "   "), None);
        assert_eq!(ws.add_item(99, "Check oil"), None);
        assert_eq!(ws.add_section(99), None);
        assert!(ws.checklist(id).unwrap().items.is_empty());
    }
}
