//! Checklist Composer App
//!
//! Main application component: layout controls, the printable page and the
//! export bar.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::bindings::{BrowserHost, Html2Canvas, JsPdfAssembler};
use crate::components::{ChecklistCard, ExportBar, LayoutPanel};
use crate::config::ExportSettings;
use crate::context::AppContext;
use crate::export::PdfExporter;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let settings = ExportSettings::default();
    let printable_id = settings.printable_element_id;
    let exporter = PdfExporter::new(
        Html2Canvas::new(printable_id),
        JsPdfAssembler,
        BrowserHost::new(store, settings.settle_delay_ms),
        settings,
    );
    provide_context(AppContext::new(store, exporter));

    let layout = Memo::new(move |_| store.workspace().read().layout_mode());
    let checklist_ids = move || {
        store
            .workspace()
            .read()
            .checklists()
            .iter()
            .map(|c| c.id)
            .collect::<Vec<_>>()
    };
    let container_class = move || {
        if layout.get().is_landscape() {
            "multi-checklist-container scaled-content"
        } else {
            "multi-checklist-container"
        }
    };

    view! {
        <div class="app-layout">
            <LayoutPanel />

            <main id=printable_id class=move || layout.get().page_class() data-layout=move || layout.get().as_str()>
                <div class=container_class>
                    <For
                        each=checklist_ids
                        key=|id| *id
                        children=move |id| view! { <ChecklistCard checklist_id=id /> }
                    />
                </div>
            </main>

            <ExportBar />

            <footer class="app-footer no-print">
                "Simple checklist template from the book " <em>"The Checklist Manifesto"</em>
            </footer>
        </div>
    }
}
