//! Export Bar Component
//!
//! Print and Save-as-PDF buttons under the page.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ExportBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let exporting = move || store.exporting().get();

    view! {
        <div class="export-bar no-print">
            <button class="print-btn" on:click=move |_| ctx.print()>"Print"</button>
            <button
                class="pdf-btn"
                disabled=exporting
                on:click=move |_| ctx.export_pdf()
            >
                {move || if exporting() {
                    view! {
                        <span class="spinner" aria-hidden="true">"◌"</span>
                        <span>"Saving..."</span>
                    }.into_any()
                } else {
                    view! { "Save as PDF" }.into_any()
                }}
            </button>
        </div>
    }
}
