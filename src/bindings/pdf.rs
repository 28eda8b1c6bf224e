//! PDF Document Bindings
//!
//! Thin wrapper over the global `jspdf.jsPDF` class.

use wasm_bindgen::prelude::*;

use super::js_error;
use crate::export::{DocumentAssembler, DocumentOptions, ExportError, PageSize, PdfDocument, Placement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = jspdf, js_name = jsPDF)]
    type JsPdf;

    #[wasm_bindgen(constructor, js_namespace = jspdf, js_class = "jsPDF", catch)]
    fn new(options: &JsValue) -> Result<JsPdf, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn internal(this: &JsPdf) -> JsPdfInternal;

    #[wasm_bindgen(method, catch, js_name = addImage)]
    fn add_image(this: &JsPdf, data: &str, format: &str, x: f64, y: f64, width: f64, height: f64) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn save(this: &JsPdf, filename: &str) -> Result<JsValue, JsValue>;

    type JsPdfInternal;

    #[wasm_bindgen(method, getter, js_name = pageSize)]
    fn page_size(this: &JsPdfInternal) -> JsPageSize;

    type JsPageSize;

    #[wasm_bindgen(method, js_name = getWidth)]
    fn get_width(this: &JsPageSize) -> f64;

    #[wasm_bindgen(method, js_name = getHeight)]
    fn get_height(this: &JsPageSize) -> f64;
}

/// Creates jsPDF documents
pub struct JsPdfAssembler;

impl DocumentAssembler for JsPdfAssembler {
    type Document = JsPdfDocument;

    fn create(&self, options: &DocumentOptions) -> Result<JsPdfDocument, ExportError> {
        let js_options = serde_wasm_bindgen::to_value(options).map_err(|e| ExportError::Document(e.to_string()))?;
        let pdf = JsPdf::new(&js_options).map_err(|e| ExportError::Document(js_error(e)))?;
        Ok(JsPdfDocument(pdf))
    }
}

pub struct JsPdfDocument(JsPdf);

impl PdfDocument for JsPdfDocument {
    fn page_size(&self) -> PageSize {
        let size = self.0.internal().page_size();
        PageSize {
            width: size.get_width(),
            height: size.get_height(),
        }
    }

    fn add_png(&mut self, payload: &str, at: Placement) -> Result<(), ExportError> {
        self.0
            .add_image(payload, "PNG", at.x, at.y, at.width, at.height)
            .map(drop)
            .map_err(|e| ExportError::Image(js_error(e)))
    }

    fn save(&self, file_name: &str) -> Result<(), ExportError> {
        self.0.save(file_name).map(drop).map_err(|e| ExportError::Save {
            file: file_name.to_string(),
            reason: js_error(e),
        })
    }
}
