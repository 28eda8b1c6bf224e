//! Entry Row Component
//!
//! A single item or section line: checkbox, inline editing, indentation and delete.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::editing::EditState;
use crate::item_list::ItemList;
use crate::models::{ChecklistId, Entry, EntryId, IndentDirection};
use crate::store::{store_edit_items, use_app_store};

/// One checklist line
#[component]
pub fn EntryRow(checklist_id: ChecklistId, entry_id: EntryId, items: Memo<ItemList>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let entry = Memo::new(move |_| items.with(|list| list.get(entry_id).cloned()));
    let is_section = move || entry.with(|e| e.as_ref().is_some_and(Entry::is_section));
    let completed = move || entry.with(|e| e.as_ref().is_some_and(Entry::is_completed));
    let text = move || entry.with(|e| e.as_ref().map(|e| e.text().to_string()).unwrap_or_default());
    let indent = move || entry.with(|e| e.as_ref().map(Entry::display_indentation).unwrap_or(0));

    // Inline editing
    let edit = RwSignal::new(EditState::Viewing);
    let is_editing = Memo::new(move |_| edit.with(EditState::is_editing));
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if is_editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
                input.select();
            }
        }
    });

    let begin_edit = move |_: web_sys::MouseEvent| {
        if let Some(state) = entry.with_untracked(|e| e.as_ref().and_then(EditState::begin)) {
            edit.set(state);
        }
    };

    // Enter and blur both land here; whichever comes second finds nothing to do
    let commit = move || {
        if !edit.with_untracked(EditState::is_editing) {
            return;
        }
        let mut state = edit.get_untracked();
        store_edit_items(&store, checklist_id, |list| state.commit(list, entry_id));
        edit.set(EditState::Viewing);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        ctx.play_keystroke();
        match ev.key().as_str() {
            "Enter" => commit(),
            "Escape" => edit.update(EditState::cancel),
            "Tab" if !entry.with_untracked(|e| e.as_ref().is_some_and(Entry::is_section)) => {
                ev.prevent_default();
                let direction = if ev.shift_key() { IndentDirection::Decrease } else { IndentDirection::Increase };
                store_edit_items(&store, checklist_id, |list| list.indent(entry_id, direction));
            }
            _ => {}
        }
    };

    let row_class = move || {
        let mut c = String::from("entry-row");
        if is_section() { c.push_str(" section"); }
        if completed() { c.push_str(" completed"); }
        c
    };

    view! {
        <div class=row_class style=move || format!("padding-left: {}rem;", f64::from(indent()) * 2.5)>
            <span class="drag-handle no-print" aria-label="Drag to reorder">"⠿"</span>

            // Checkbox
            <input
                type="checkbox"
                class="entry-checkbox"
                prop:checked=completed
                disabled=is_section
                aria-label=move || format!("Mark \"{}\" as {}", text(), if completed() { "incomplete" } else { "complete" })
                on:change=move |_| {
                    store_edit_items(&store, checklist_id, |list| list.toggle(entry_id));
                }
            />

            // Text
            <Show
                when=move || is_editing.get()
                fallback=move || view! {
                    <span
                        class="entry-text"
                        title=move || (!completed()).then_some("Double-click to edit")
                        on:dblclick=begin_edit
                    >
                        {text}
                    </span>
                }
            >
                <input
                    node_ref=input_ref
                    type="text"
                    class="entry-edit"
                    aria-label="Edit item text"
                    prop:value=move || edit.with(|s| s.draft().unwrap_or_default().to_string())
                    on:input=move |ev| edit.update(|s| s.set_draft(event_target_value(&ev)))
                    on:blur=move |_| commit()
                    on:keydown=on_keydown
                />
            </Show>

            // Delete button
            <button
                class="delete-btn no-print"
                aria-label=move || format!("Delete item \"{}\"", text())
                on:click=move |_| {
                    store_edit_items(&store, checklist_id, |list| list.delete(entry_id));
                }
            >
                "🗑"
            </button>
        </div>
    }
}
