//! Application Context
//!
//! Browser capabilities shared via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bindings::{self, BrowserExporter, KeystrokeSound};
use crate::export::ExportRequest;
use crate::store::{AppStateStoreFields, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    /// Keystroke feedback; lazily opens an audio context on first use
    sound: StoredValue<KeystrokeSound, LocalStorage>,
    exporter: StoredValue<Rc<BrowserExporter>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, exporter: BrowserExporter) -> Self {
        Self {
            store,
            sound: StoredValue::new_local(KeystrokeSound::default()),
            exporter: StoredValue::new_local(Rc::new(exporter)),
        }
    }

    /// Fire-and-forget typing sound
    pub fn play_keystroke(&self) {
        self.sound.with_value(KeystrokeSound::play);
    }

    /// Open the browser print dialog
    pub fn print(&self) {
        bindings::print_page();
    }

    /// Start a PDF export of the current page. Ignored while one is running.
    pub fn export_pdf(&self) {
        let exporter = self.exporter.get_value();
        let request = self
            .store
            .workspace()
            .with_untracked(|ws| ExportRequest::from_workspace(ws, exporter.settings()));
        tracing::info!(file = %request.file_name, "pdf export requested");
        spawn_local(async move {
            exporter.export(request).await;
        });
    }
}
