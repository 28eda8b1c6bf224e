//! Page Layout Panel
//!
//! Adds checklists to the page and shows how many are in use.

use leptos::prelude::*;

use crate::config::MAX_CHECKLISTS;
use crate::store::{store_add_checklist, use_app_store, AppStateStoreFields};

#[component]
pub fn LayoutPanel() -> impl IntoView {
    let store = use_app_store();

    let count = move || store.workspace().read().len();
    let full = move || !store.workspace().read().can_add();

    view! {
        <div class="layout-panel no-print">
            <h2>"Page Layout"</h2>
            <div class="layout-panel-row">
                <button
                    class="add-checklist-btn"
                    disabled=full
                    on:click=move |_| store_add_checklist(&store)
                >
                    "+ Add Checklist"
                </button>
                <span class="checklist-count">
                    {move || format!("{} / {} Checklists", count(), MAX_CHECKLISTS)}
                </span>
            </div>
        </div>
    }
}
