//! Checklist Card Component
//!
//! One checklist on the page: header fields, entries, add controls and the
//! attribution footer.

use leptos::prelude::*;

use crate::components::{ItemListView, NewItemForm, TypeSelector};
use crate::context::AppContext;
use crate::models::{ChecklistId, ChecklistType};
use crate::store::{
    store_add_section, store_remove_checklist, store_update_checklist, use_app_store, AppStateStoreFields,
};
use crate::workspace::ChecklistPatch;

#[component]
pub fn ChecklistCard(checklist_id: ChecklistId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let checklist = Memo::new(move |_| store.workspace().read().checklist(checklist_id).cloned());
    let items = Memo::new(move |_| checklist.with(|c| c.as_ref().map(|c| c.items.clone()).unwrap_or_default()));
    let checklist_type = Signal::derive(move || {
        checklist.with(|c| c.as_ref().map(|c| c.checklist_type).unwrap_or_default())
    });
    let title = move || checklist.with(|c| c.as_ref().map(|c| c.title.clone()).unwrap_or_default());
    let context = move || checklist.with(|c| c.as_ref().map(|c| c.context.clone()).unwrap_or_default());
    let created_by = move || checklist.with(|c| c.as_ref().map(|c| c.created_by.clone()).unwrap_or_default());
    let completed_by = move || checklist.with(|c| c.as_ref().map(|c| c.completed_by.clone()).unwrap_or_default());

    let update = move |patch: ChecklistPatch| store_update_checklist(&store, checklist_id, patch);
    let can_remove = move || store.workspace().read().can_remove();
    let progress = move || items.with(|list| format!("{} / {} done", list.completed_count(), list.item_count()));

    view! {
        <section class="checklist-card">
            <Show when=can_remove>
                <button
                    class="remove-checklist-btn no-print"
                    aria-label="Remove Checklist"
                    on:click=move |_| store_remove_checklist(&store, checklist_id)
                >
                    "×"
                </button>
            </Show>

            <input
                type="text"
                class="checklist-title"
                placeholder="Checklist Title"
                prop:value=title
                on:input=move |ev| update(ChecklistPatch { title: Some(event_target_value(&ev)), ..Default::default() })
                on:keydown=move |_| ctx.play_keystroke()
            />
            <hr class="dashed" />

            <div class="checklist-meta">
                <label>
                    <span class="field-label">"Type"</span>
                    <TypeSelector
                        current_type=checklist_type
                        on_change=move |kind: ChecklistType| update(ChecklistPatch { checklist_type: Some(kind), ..Default::default() })
                    />
                </label>
                <label>
                    <span class="field-label">"Context"</span>
                    <input
                        type="text"
                        placeholder="Description of checklist"
                        prop:value=context
                        on:input=move |ev| update(ChecklistPatch { context: Some(event_target_value(&ev)), ..Default::default() })
                        on:keydown=move |_| ctx.play_keystroke()
                    />
                </label>
            </div>
            <hr class="dashed" />

            <ItemListView checklist_id=checklist_id items=items />
            <p class="checklist-progress no-print">{progress}</p>

            <NewItemForm checklist_id=checklist_id />
            <div class="section-controls no-print">
                <button class="add-section-btn" on:click=move |_| store_add_section(&store, checklist_id)>
                    "Add Section"
                </button>
            </div>
            <hr class="dashed" />

            <div class="checklist-footer">
                <label>
                    <span class="field-label">"Checklist created by:"</span>
                    <input
                        type="text"
                        placeholder="<Name>"
                        prop:value=created_by
                        on:input=move |ev| update(ChecklistPatch { created_by: Some(event_target_value(&ev)), ..Default::default() })
                        on:keydown=move |_| ctx.play_keystroke()
                    />
                </label>
                <label>
                    <span class="field-label">"Checklist completed by:"</span>
                    <input
                        type="text"
                        placeholder="<Name>"
                        prop:value=completed_by
                        on:input=move |ev| update(ChecklistPatch { completed_by: Some(event_target_value(&ev)), ..Default::default() })
                        on:keydown=move |_| ctx.play_keystroke()
                    />
                </label>
            </div>
        </section>
    }
}
