//! Application Defaults
//!
//! Fixed limits and export settings in one place.

/// A workspace holds at most this many checklists
pub const MAX_CHECKLISTS: usize = 3;

/// Deepest item indentation level
pub const MAX_INDENTATION: u8 = 5;

/// Title given to a freshly created checklist
pub const DEFAULT_TITLE: &str = "TITLE";

/// Label given to a freshly added section
pub const DEFAULT_SECTION_LABEL: &str = "New Section";

/// PDF export settings
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    /// Upscale factor used when rasterizing the page
    pub capture_scale: f64,
    /// Blank border kept on every side of the page, in `unit`
    pub margin: f64,
    pub unit: &'static str,
    pub page_format: &'static str,
    /// Time given to the stylesheet to hide editing chrome before capture
    pub settle_delay_ms: u32,
    /// File stem used when the first checklist has no title
    pub fallback_file_stem: &'static str,
    /// DOM id of the element that is captured
    pub printable_element_id: &'static str,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            capture_scale: 2.0,
            margin: 10.0,
            unit: "mm",
            page_format: "a4",
            settle_delay_ms: 50,
            fallback_file_stem: "checklist",
            printable_element_id: "printable-area",
        }
    }
}
