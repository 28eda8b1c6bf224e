//! PDF Export
//!
//! Captures the printable area and lays it out on a single A4 page. The
//! rasterizer, the PDF library and the page chrome are reached through the
//! traits below so the sequencing can run without a browser.

use std::cell::Cell;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::config::ExportSettings;
use crate::workspace::{LayoutMode, Workspace};

/// Shown to the user whenever an export fails
pub const FAILURE_MESSAGE: &str = "Sorry, there was an error generating the PDF.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    #[error("printable area `{0}` not found")]
    SurfaceMissing(String),
    #[error("capture failed: {0}")]
    Capture(String),
    #[error("image encoding failed: {0}")]
    Encode(String),
    #[error("document setup failed: {0}")]
    Document(String),
    #[error("placing image failed: {0}")]
    Image(String),
    #[error("saving {file} failed: {reason}")]
    Save { file: String, reason: String },
}

/// Page dimensions in document units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

/// Where the captured image goes on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The page minus `margin` on every side
pub fn image_placement(page: PageSize, margin: f64) -> Placement {
    Placement {
        x: margin,
        y: margin,
        width: page.width - margin * 2.0,
        height: page.height - margin * 2.0,
    }
}

/// Lowercased title with whitespace runs turned into `_`
pub fn export_filename(title: &str, fallback_stem: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    let mut in_space = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
        } else {
            stem.push(ch);
            in_space = false;
        }
    }
    if stem.is_empty() {
        stem.push_str(fallback_stem);
    }
    // Lowercase the whole stem so final sigma maps correctly
    format!("{}.pdf", stem.to_lowercase())
}

/// Options handed to the rasterizer
#[derive(Debug, Clone, Serialize)]
pub struct CaptureOptions {
    pub scale: f64,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    pub logging: bool,
}

/// Options handed to the PDF constructor
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOptions {
    pub orientation: &'static str,
    pub unit: &'static str,
    pub format: &'static str,
}

/// Everything the export needs from the workspace, read when the button is pressed
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub layout: LayoutMode,
    pub file_name: String,
}

impl ExportRequest {
    pub fn from_workspace(workspace: &Workspace, settings: &ExportSettings) -> Self {
        let title = workspace.checklists().first().map(|c| c.title.as_str()).unwrap_or_default();
        Self {
            layout: workspace.layout_mode(),
            file_name: export_filename(title, settings.fallback_file_stem),
        }
    }
}

#[async_trait(?Send)]
pub trait SurfaceCapture {
    /// Rasterize the printable area into an embeddable PNG payload
    async fn capture(&self, options: &CaptureOptions) -> Result<String, ExportError>;
}

pub trait PdfDocument {
    fn page_size(&self) -> PageSize;
    fn add_png(&mut self, payload: &str, at: Placement) -> Result<(), ExportError>;
    fn save(&self, file_name: &str) -> Result<(), ExportError>;
}

pub trait DocumentAssembler {
    type Document: PdfDocument;

    fn create(&self, options: &DocumentOptions) -> Result<Self::Document, ExportError>;
}

/// Page-level side effects around an export
#[async_trait(?Send)]
pub trait ExportHost {
    fn enter_exporting(&self);
    fn exit_exporting(&self);
    /// Wait for the layout to reflect `enter_exporting`
    async fn settle(&self);
    fn reset_scroll(&self);
    fn report_failure(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// Another export was still running
    Skipped,
    Saved(String),
    Failed(ExportError),
}

pub struct PdfExporter<C, A, H> {
    capture: C,
    assembler: A,
    host: H,
    settings: ExportSettings,
    exporting: Cell<bool>,
}

impl<C, A, H> PdfExporter<C, A, H>
where
    C: SurfaceCapture,
    A: DocumentAssembler,
    H: ExportHost,
{
    pub fn new(capture: C, assembler: A, host: H, settings: ExportSettings) -> Self {
        Self {
            capture,
            assembler,
            host,
            settings,
            exporting: Cell::new(false),
        }
    }

    #[cfg(test)]
    pub fn is_exporting(&self) -> bool {
        self.exporting.get()
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    pub async fn export(&self, request: ExportRequest) -> ExportOutcome {
        if self.exporting.get() {
            tracing::debug!("export already running");
            return ExportOutcome::Skipped;
        }
        let _guard = ExportingGuard::enter(&self.exporting, &self.host);
        self.host.settle().await;

        match self.render(&request).await {
            Ok(()) => {
                tracing::info!(file = %request.file_name, layout = request.layout.as_str(), "pdf saved");
                ExportOutcome::Saved(request.file_name)
            }
            Err(err) => {
                tracing::error!(error = %err, "pdf export failed");
                self.host.report_failure(FAILURE_MESSAGE);
                ExportOutcome::Failed(err)
            }
        }
    }

    async fn render(&self, request: &ExportRequest) -> Result<(), ExportError> {
        self.host.reset_scroll();

        let options = CaptureOptions {
            scale: self.settings.capture_scale,
            use_cors: true,
            logging: false,
        };
        let png = self.capture.capture(&options).await?;

        let mut document = self.assembler.create(&DocumentOptions {
            orientation: request.layout.as_str(),
            unit: self.settings.unit,
            format: self.settings.page_format,
        })?;
        let placement = image_placement(document.page_size(), self.settings.margin);
        tracing::debug!(?placement, "placing capture");
        document.add_png(&png, placement)?;
        document.save(&request.file_name)
    }
}

/// Holds the exporting flag for the duration of one export
struct ExportingGuard<'a, H: ExportHost> {
    flag: &'a Cell<bool>,
    host: &'a H,
}

impl<'a, H: ExportHost> ExportingGuard<'a, H> {
    fn enter(flag: &'a Cell<bool>, host: &'a H) -> Self {
        flag.set(true);
        host.enter_exporting();
        Self { flag, host }
    }
}

impl<H: ExportHost> Drop for ExportingGuard<'_, H> {
    fn drop(&mut self) {
        self.host.exit_exporting();
        self.flag.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeCapture {
        calls: Cell<usize>,
        fail: bool,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait(?Send)]
    impl SurfaceCapture for FakeCapture {
        async fn capture(&self, options: &CaptureOptions) -> Result<String, ExportError> {
            self.calls.set(self.calls.get() + 1);
            assert_eq!(options.scale, 2.0);
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            if self.fail {
                return Err(ExportError::Capture("tainted canvas".into()));
            }
            Ok("data:image/png;base64,AAAA".into())
        }
    }

    #[derive(Default, Clone)]
    struct Record {
        placements: Rc<RefCell<Vec<Placement>>>,
        saved: Rc<RefCell<Vec<String>>>,
    }

    struct FakeAssembler {
        record: Record,
        fail_save: bool,
    }

    struct FakeDocument {
        page: PageSize,
        record: Record,
        fail_save: bool,
    }

    impl DocumentAssembler for FakeAssembler {
        type Document = FakeDocument;

        fn create(&self, options: &DocumentOptions) -> Result<FakeDocument, ExportError> {
            assert_eq!(options.unit, "mm");
            assert_eq!(options.format, "a4");
            let page = match options.orientation {
                "landscape" => PageSize { width: 297.0, height: 210.0 },
                _ => PageSize { width: 210.0, height: 297.0 },
            };
            Ok(FakeDocument { page, record: self.record.clone(), fail_save: self.fail_save })
        }
    }

    impl PdfDocument for FakeDocument {
        fn page_size(&self) -> PageSize {
            self.page
        }

        fn add_png(&mut self, _payload: &str, at: Placement) -> Result<(), ExportError> {
            self.record.placements.borrow_mut().push(at);
            Ok(())
        }

        fn save(&self, file_name: &str) -> Result<(), ExportError> {
            if self.fail_save {
                return Err(ExportError::Save { file: file_name.into(), reason: "blocked".into() });
            }
            self.record.saved.borrow_mut().push(file_name.into());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeHost {
        events: RefCell<Vec<&'static str>>,
    }

    #[async_trait(?Send)]
    impl ExportHost for FakeHost {
        fn enter_exporting(&self) {
            self.events.borrow_mut().push("enter");
        }
        fn exit_exporting(&self) {
            self.events.borrow_mut().push("exit");
        }
        async fn settle(&self) {
            self.events.borrow_mut().push("settle");
        }
        fn reset_scroll(&self) {
            self.events.borrow_mut().push("scroll");
        }
        fn report_failure(&self, message: &str) {
            assert_eq!(message, FAILURE_MESSAGE);
            self.events.borrow_mut().push("failure");
        }
    }

    fn make_exporter(capture: FakeCapture, fail_save: bool) -> (PdfExporter<FakeCapture, FakeAssembler, FakeHost>, Record) {
        let record = Record::default();
        let assembler = FakeAssembler { record: record.clone(), fail_save };
        let exporter = PdfExporter::new(capture, assembler, FakeHost::default(), ExportSettings::default());
        (exporter, record)
    }

    fn request(layout: LayoutMode) -> ExportRequest {
        ExportRequest { layout, file_name: "preflight.pdf".into() }
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Before Takeoff", "checklist"), "before_takeoff.pdf");
        assert_eq!(export_filename("Engine \t Start", "checklist"), "engine_start.pdf");
        assert_eq!(export_filename("", "checklist"), "checklist.pdf");
        assert_eq!(export_filename(" ", "checklist"), "_.pdf");
        assert_eq!(export_filename("ΟΔΟΣ", "checklist"), "οδος.pdf");
    }

    #[test]
    fn test_image_placement_keeps_margin() {
        let portrait = image_placement(PageSize { width: 210.0, height: 297.0 }, 10.0);
        assert_eq!(portrait, Placement { x: 10.0, y: 10.0, width: 190.0, height: 277.0 });
    }

    #[test]
    fn test_request_from_workspace() {
        let mut ws = Workspace::new();
        let settings = ExportSettings::default();
        let req = ExportRequest::from_workspace(&ws, &settings);
        assert_eq!(req, ExportRequest { layout: LayoutMode::Portrait, file_name: "title.pdf".into() });

        let first = ws.checklists()[0].id;
        ws.update_checklist(first, crate::workspace::ChecklistPatch { title: Some(String::new()), ..Default::default() });
        ws.add_checklist();
        let req = ExportRequest::from_workspace(&ws, &settings);
        assert_eq!(req, ExportRequest { layout: LayoutMode::Landscape, file_name: "checklist.pdf".into() });
    }

    #[tokio::test]
    async fn test_export_saves_portrait_page() {
        let (exporter, record) = make_exporter(FakeCapture::default(), false);
        let outcome = exporter.export(request(LayoutMode::Portrait)).await;

        assert_eq!(outcome, ExportOutcome::Saved("preflight.pdf".into()));
        assert_eq!(*record.saved.borrow(), vec!["preflight.pdf".to_string()]);
        assert_eq!(
            *record.placements.borrow(),
            vec![Placement { x: 10.0, y: 10.0, width: 190.0, height: 277.0 }]
        );
        assert_eq!(*exporter.host.events.borrow(), vec!["enter", "settle", "scroll", "exit"]);
        assert!(!exporter.is_exporting());
    }

    #[tokio::test]
    async fn test_export_uses_landscape_for_many_checklists() {
        let (exporter, record) = make_exporter(FakeCapture::default(), false);
        exporter.export(request(LayoutMode::Landscape)).await;
        assert_eq!(
            *record.placements.borrow(),
            vec![Placement { x: 10.0, y: 10.0, width: 277.0, height: 190.0 }]
        );
    }

    #[tokio::test]
    async fn test_capture_failure_is_reported_and_cleaned_up() {
        let capture = FakeCapture { fail: true, ..Default::default() };
        let (exporter, record) = make_exporter(capture, false);
        let outcome = exporter.export(request(LayoutMode::Portrait)).await;

        assert!(matches!(outcome, ExportOutcome::Failed(ExportError::Capture(_))));
        assert!(record.saved.borrow().is_empty());
        assert_eq!(*exporter.host.events.borrow(), vec!["enter", "settle", "scroll", "failure", "exit"]);
        assert!(!exporter.is_exporting());
    }

    #[tokio::test]
    async fn test_save_failure_is_reported() {
        let (exporter, _) = make_exporter(FakeCapture::default(), true);
        let outcome = exporter.export(request(LayoutMode::Portrait)).await;
        assert!(matches!(outcome, ExportOutcome::Failed(ExportError::Save { .. })));
        assert!(!exporter.is_exporting());

        // a failed export does not block the next one
        exporter.export(request(LayoutMode::Portrait)).await;
        assert_eq!(exporter.capture.calls.get(), 2);
    }

    #[tokio::test]
    async fn test_second_export_while_running_is_skipped() {
        let (open, gate) = oneshot::channel();
        let capture = FakeCapture { gate: RefCell::new(Some(gate)), ..Default::default() };
        let (exporter, record) = make_exporter(capture, false);

        let mut first = Box::pin(exporter.export(request(LayoutMode::Portrait)));
        assert!(futures::poll!(&mut first).is_pending());
        assert!(exporter.is_exporting());

        assert_eq!(exporter.export(request(LayoutMode::Portrait)).await, ExportOutcome::Skipped);
        assert_eq!(exporter.capture.calls.get(), 1);

        open.send(()).unwrap();
        assert_eq!(first.await, ExportOutcome::Saved("preflight.pdf".into()));
        assert_eq!(exporter.capture.calls.get(), 1);
        assert_eq!(record.saved.borrow().len(), 1);
        assert!(!exporter.is_exporting());
    }
}
