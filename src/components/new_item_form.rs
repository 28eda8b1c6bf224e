//! New Item Form Component
//!
//! Form for appending items to a checklist.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::ChecklistId;
use crate::store::{store_add_item, use_app_store};

/// Form for appending a new item at the end of the list
#[component]
pub fn NewItemForm(checklist_id: ChecklistId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if store_add_item(&store, checklist_id, &text) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-item-form no-print" on:submit=add_item>
            <input
                type="text"
                placeholder="Add a new item..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                on:keydown=move |_| ctx.play_keystroke()
            />
            <button type="submit" aria-label="Add Item">"+"</button>
        </form>
    }
}
