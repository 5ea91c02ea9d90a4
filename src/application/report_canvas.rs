// Drawing-surface contract consumed by the report pipeline

use crate::application::report_service::ReportError;

/// RGB components in the 0.0..=1.0 range.
pub type Rgb = (f64, f64, f64);

/// Document assembler and drawing primitives behind the report pipeline.
///
/// The pipeline drives the page lifecycle strictly: `begin_page`, content,
/// `end_page`, repeated per physical page, then `finalize` exactly once.
/// Coordinates are points with the origin at the bottom left of the page.
pub trait ReportCanvas {
    fn begin_page(&mut self, width_pt: f64, height_pt: f64);
    fn end_page(&mut self);

    /// First-page header: report title, end-time line and separator rule.
    fn draw_header(&mut self, title: &str, end_time_label: &str);

    /// Shared footer, drawn on every page.
    fn draw_footer(&mut self);

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb, width_pt: f64);
    fn stroke_polyline(&mut self, points: &[(f64, f64)], color: Rgb, width_pt: f64);
    fn text(&mut self, position: (f64, f64), size_pt: f64, content: &str);
    fn text_bold(&mut self, position: (f64, f64), size_pt: f64, content: &str);

    /// Seals the document and serializes it. Consumes the canvas; a report
    /// is finalized exactly once.
    fn finalize(self) -> Result<Vec<u8>, ReportError>
    where
        Self: Sized;
}
