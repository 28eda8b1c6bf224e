//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::item_list::ItemList;
use crate::models::ChecklistId;
use crate::workspace::{ChecklistPatch, Workspace};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The checklists on the page
    pub workspace: Workspace,
    /// True while a PDF export is running
    pub exporting: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_add_checklist(store: &AppStore) {
    store.workspace().write().add_checklist();
}

pub fn store_remove_checklist(store: &AppStore, id: ChecklistId) {
    store.workspace().write().remove_checklist(id);
}

/// Merge a partial update into one checklist
pub fn store_update_checklist(store: &AppStore, id: ChecklistId, patch: ChecklistPatch) {
    store.workspace().write().update_checklist(id, patch);
}

/// Apply an item operation to one checklist's entries
pub fn store_edit_items<F>(store: &AppStore, id: ChecklistId, f: F) -> bool
where
    F: FnOnce(&mut ItemList) -> bool,
{
    let changed = store.workspace().write().edit_items(id, f);
    if !changed {
        tracing::debug!(checklist = id, "item operation left list unchanged");
    }
    changed
}

/// Append an item with a fresh id. Returns false for blank text.
pub fn store_add_item(store: &AppStore, id: ChecklistId, text: &str) -> bool {
    let field = store.workspace();
    let mut workspace = field.write();
    workspace.add_item(id, text).is_some()
}

pub fn store_add_section(store: &AppStore, id: ChecklistId) {
    let field = store.workspace();
    let mut workspace = field.write();
    workspace.add_section(id);
}
