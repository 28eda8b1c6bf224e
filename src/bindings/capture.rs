//! Surface Capture
//!
//! Rasterizes the printable area with the global `html2canvas` function.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::js_error;
use crate::export::{CaptureOptions, ExportError, SurfaceCapture};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = html2canvas, catch)]
    fn html2canvas(element: &web_sys::HtmlElement, options: JsValue) -> Result<js_sys::Promise, JsValue>;
}

/// Captures the element with the given DOM id
pub struct Html2Canvas {
    element_id: &'static str,
}

impl Html2Canvas {
    pub fn new(element_id: &'static str) -> Self {
        Self { element_id }
    }

    fn element(&self) -> Option<web_sys::HtmlElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(self.element_id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
    }
}

#[async_trait(?Send)]
impl SurfaceCapture for Html2Canvas {
    async fn capture(&self, options: &CaptureOptions) -> Result<String, ExportError> {
        let element = self
            .element()
            .ok_or_else(|| ExportError::SurfaceMissing(self.element_id.to_string()))?;
        let js_options = serde_wasm_bindgen::to_value(options).map_err(|e| ExportError::Capture(e.to_string()))?;

        let promise = html2canvas(&element, js_options).map_err(|e| ExportError::Capture(js_error(e)))?;
        let canvas = JsFuture::from(promise)
            .await
            .map_err(|e| ExportError::Capture(js_error(e)))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| ExportError::Capture("html2canvas did not return a canvas".to_string()))?;

        tracing::debug!(width = canvas.width(), height = canvas.height(), "surface captured");
        canvas
            .to_data_url_with_type("image/png")
            .map_err(|e| ExportError::Encode(js_error(e)))
    }
}
