//! Page Commands
//!
//! Print dialog, alerts, scrolling and the export chrome toggle.

use async_trait::async_trait;
use leptos::prelude::*;

use super::js_error;
use crate::export::ExportHost;
use crate::store::{AppStateStoreFields, AppStore};

/// Body class the stylesheet uses to hide editing chrome during capture
const EXPORTING_BODY_CLASS: &str = "pdf-generating";

pub fn print_page() {
    let Some(win) = web_sys::window() else { return };
    if let Err(e) = win.print() {
        tracing::warn!(error = %js_error(e), "print dialog failed");
    }
}

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

fn scroll_to_origin() {
    if let Some(win) = web_sys::window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn set_body_class(class: &str, on: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(e) = result {
        tracing::warn!(class, error = %js_error(e), "body class update failed");
    }
}

/// Export chrome backed by the live document and the app store
pub struct BrowserHost {
    store: AppStore,
    settle_delay_ms: u32,
}

impl BrowserHost {
    pub fn new(store: AppStore, settle_delay_ms: u32) -> Self {
        Self { store, settle_delay_ms }
    }
}

#[async_trait(?Send)]
impl ExportHost for BrowserHost {
    fn enter_exporting(&self) {
        self.store.exporting().set(true);
        set_body_class(EXPORTING_BODY_CLASS, true);
    }

    fn exit_exporting(&self) {
        set_body_class(EXPORTING_BODY_CLASS, false);
        self.store.exporting().set(false);
    }

    async fn settle(&self) {
        gloo_timers::future::TimeoutFuture::new(self.settle_delay_ms).await;
    }

    fn reset_scroll(&self) {
        scroll_to_origin();
    }

    fn report_failure(&self, message: &str) {
        alert(message);
    }
}
