//! Browser Bindings
//!
//! Frontend bindings to the page, the rasterizer, the PDF library and Web Audio.

mod capture;
mod page;
mod pdf;
mod sound;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::export::PdfExporter;

pub use capture::Html2Canvas;
pub use page::{print_page, BrowserHost};
pub use pdf::JsPdfAssembler;
pub use sound::KeystrokeSound;

/// Exporter wired to the real page
pub type BrowserExporter = PdfExporter<Html2Canvas, JsPdfAssembler, BrowserHost>;

/// Readable message for a thrown JS value
pub(crate) fn js_error(value: JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}
