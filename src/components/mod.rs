//! UI Components
//!
//! Reusable Leptos components.

mod checklist_card;
mod entry_row;
mod export_bar;
mod item_list_view;
mod layout_panel;
mod new_item_form;
mod type_selector;

pub use checklist_card::ChecklistCard;
pub use entry_row::EntryRow;
pub use export_bar::ExportBar;
pub use item_list_view::ItemListView;
pub use layout_panel::LayoutPanel;
pub use new_item_form::NewItemForm;
pub use type_selector::TypeSelector;
