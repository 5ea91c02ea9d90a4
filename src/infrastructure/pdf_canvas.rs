// PDF drawing surface over printpdf built-in fonts and vector shapes

use std::io::BufWriter;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Pt, Rgb,
};

use crate::application::report_canvas::{self, ReportCanvas};
use crate::application::report_service::ReportError;

const HEADER_RULE_Y: f64 = 770.0;
const FOOTER_Y: f64 = 30.0;

/// Report document assembler. Owns the printpdf document, the layer of the
/// page currently open, and the two shared fonts.
pub struct PdfCanvas {
    doc: PdfDocumentReference,
    layer: Option<PdfLayerReference>,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    title: String,
    page_number: usize,
    page_width: f64,
}

impl PdfCanvas {
    pub fn new(title: &str) -> Result<Self, ReportError> {
        let doc = PdfDocument::empty(title);
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::Draw(e.to_string()))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ReportError::Draw(e.to_string()))?;

        Ok(Self {
            doc,
            layer: None,
            font,
            font_bold,
            title: title.to_string(),
            page_number: 0,
            page_width: 0.0,
        })
    }

    fn place_text(&self, font: &IndirectFontRef, position: (f64, f64), size_pt: f64, content: &str) {
        if let Some(layer) = &self.layer {
            layer.use_text(content, size_pt, pt(position.0), pt(position.1), font);
        }
    }

    fn stroke(&self, points: Vec<(Point, bool)>, color: report_canvas::Rgb, width_pt: f64) {
        let Some(layer) = &self.layer else {
            return;
        };
        layer.set_outline_color(Color::Rgb(Rgb::new(color.0, color.1, color.2, None)));
        layer.set_outline_thickness(width_pt);
        layer.add_shape(Line {
            points,
            is_closed: false,
            has_fill: false,
            has_stroke: true,
            is_clipping_path: false,
        });
    }
}

fn pt(value: f64) -> Mm {
    Mm::from(Pt(value))
}

impl ReportCanvas for PdfCanvas {
    fn begin_page(&mut self, width_pt: f64, height_pt: f64) {
        let (page, layer) = self.doc.add_page(pt(width_pt), pt(height_pt), "graphs");
        self.layer = Some(self.doc.get_page(page).get_layer(layer));
        self.page_number += 1;
        self.page_width = width_pt;
    }

    fn end_page(&mut self) {
        self.layer = None;
    }

    fn draw_header(&mut self, title: &str, end_time_label: &str) {
        self.place_text(&self.font_bold, (175.0, 800.0), 26.0, title);
        self.place_text(
            &self.font_bold,
            (175.0, 775.0),
            16.0,
            &format!("End at {}", end_time_label),
        );
        self.stroke(
            vec![
                (Point::new(pt(0.0), pt(HEADER_RULE_Y)), false),
                (Point::new(pt(self.page_width), pt(HEADER_RULE_Y)), false),
            ],
            (0.0, 0.0, 0.0),
            1.0,
        );
    }

    fn draw_footer(&mut self) {
        self.place_text(&self.font, (50.0, FOOTER_Y), 8.0, &self.title);
        let label = format!("page {}", self.page_number);
        self.place_text(&self.font, (self.page_width - 90.0, FOOTER_Y), 8.0, &label);
    }

    fn stroke_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        color: report_canvas::Rgb,
        width_pt: f64,
    ) {
        self.stroke(
            vec![
                (Point::new(pt(from.0), pt(from.1)), false),
                (Point::new(pt(to.0), pt(to.1)), false),
            ],
            color,
            width_pt,
        );
    }

    fn stroke_polyline(&mut self, points: &[(f64, f64)], color: report_canvas::Rgb, width_pt: f64) {
        if points.len() < 2 {
            return;
        }
        let points = points
            .iter()
            .map(|(x, y)| (Point::new(pt(*x), pt(*y)), false))
            .collect();
        self.stroke(points, color, width_pt);
    }

    fn text(&mut self, position: (f64, f64), size_pt: f64, content: &str) {
        self.place_text(&self.font, position, size_pt, content);
    }

    fn text_bold(&mut self, position: (f64, f64), size_pt: f64, content: &str) {
        self.place_text(&self.font_bold, position, size_pt, content);
    }

    fn finalize(self) -> Result<Vec<u8>, ReportError> {
        let mut writer = BufWriter::new(Vec::new());
        self.doc
            .save(&mut writer)
            .map_err(|e| ReportError::Draw(e.to_string()))?;
        writer
            .into_inner()
            .map_err(|e| ReportError::Draw(e.to_string()))
    }
}
