//! Item List View Component
//!
//! Displays a checklist's entries with drag-and-drop reordering and the
//! separators between items and sections.

use leptos::prelude::*;

use crate::components::EntryRow;
use crate::item_list::ItemList;
use crate::models::{ChecklistId, Entry};
use crate::store::{store_edit_items, use_app_store};

use leptos_dragdrop::*;

/// Entry list with DnD support
#[component]
pub fn ItemListView(checklist_id: ChecklistId, items: Memo<ItemList>) -> impl IntoView {
    let store = use_app_store();

    // One gesture state per list; rows never move across checklists
    let dnd = create_dnd_signals();

    let commit_reorder = move |source: u32, target: u32| {
        tracing::debug!(checklist = checklist_id, source, target, "reorder");
        store_edit_items(&store, checklist_id, |list| list.reorder(source, target));
    };

    let entry_ids = move || items.with(|list| list.iter().map(Entry::id).collect::<Vec<_>>());

    view! {
        <div class="entry-list">
            <For
                each=entry_ids
                key=|id| *id
                children=move |entry_id| {
                    let on_dragstart = make_on_dragstart(dnd, entry_id);
                    let on_dragenter = make_on_dragenter(dnd, entry_id);
                    let on_dragover = make_on_dragover();
                    let on_drop = make_on_drop(dnd, commit_reorder);
                    let on_dragend = make_on_dragend(dnd);

                    let wrapper_class = move || {
                        if dnd.is_active(entry_id) { "entry-wrapper dragging" } else { "entry-wrapper" }
                    };
                    let boundary = move || items.with(|list| list.is_boundary_after_id(entry_id));

                    view! {
                        <div
                            class=wrapper_class
                            draggable="true"
                            on:dragstart=on_dragstart
                            on:dragenter=on_dragenter
                            on:dragover=on_dragover
                            on:drop=on_drop
                            on:dragend=on_dragend
                        >
                            <EntryRow checklist_id=checklist_id entry_id=entry_id items=items />
                        </div>
                        <Show when=boundary>
                            <hr class="entry-boundary" />
                        </Show>
                    }
                }
            />
        </div>
    }
}
