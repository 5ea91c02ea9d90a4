// Shared test doubles: an in-memory catalog and a canvas that records the
// drawing calls the pipeline makes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use meter_report::application::report_canvas::{ReportCanvas, Rgb};
use meter_report::application::report_service::ReportError;
use meter_report::application::statistics_catalog::StatisticsCatalog;
use meter_report::domain::series::SeriesSample;
use meter_report::domain::window::TimeWindow;

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    BeginPage {
        width: f64,
        height: f64,
    },
    EndPage,
    Header {
        title: String,
        end_label: String,
    },
    Footer,
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Rgb,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        color: Rgb,
    },
    Text {
        position: (f64, f64),
        content: String,
        bold: bool,
    },
}

pub type OpLog = Arc<Mutex<Vec<CanvasOp>>>;

/// Canvas that records calls instead of drawing, so tests can assert on
/// page structure and placement.
pub struct RecordingCanvas {
    ops: OpLog,
}

impl RecordingCanvas {
    pub fn new() -> (Self, OpLog) {
        let ops: OpLog = Arc::new(Mutex::new(Vec::new()));
        (Self { ops: ops.clone() }, ops)
    }

    fn push(&self, op: CanvasOp) {
        self.ops.lock().unwrap().push(op);
    }
}

impl ReportCanvas for RecordingCanvas {
    fn begin_page(&mut self, width_pt: f64, height_pt: f64) {
        self.push(CanvasOp::BeginPage {
            width: width_pt,
            height: height_pt,
        });
    }

    fn end_page(&mut self) {
        self.push(CanvasOp::EndPage);
    }

    fn draw_header(&mut self, title: &str, end_time_label: &str) {
        self.push(CanvasOp::Header {
            title: title.to_string(),
            end_label: end_time_label.to_string(),
        });
    }

    fn draw_footer(&mut self) {
        self.push(CanvasOp::Footer);
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb, _width_pt: f64) {
        self.push(CanvasOp::Line { from, to, color });
    }

    fn stroke_polyline(&mut self, points: &[(f64, f64)], color: Rgb, _width_pt: f64) {
        self.push(CanvasOp::Polyline {
            points: points.to_vec(),
            color,
        });
    }

    fn text(&mut self, position: (f64, f64), _size_pt: f64, content: &str) {
        self.push(CanvasOp::Text {
            position,
            content: content.to_string(),
            bold: false,
        });
    }

    fn text_bold(&mut self, position: (f64, f64), _size_pt: f64, content: &str) {
        self.push(CanvasOp::Text {
            position,
            content: content.to_string(),
            bold: true,
        });
    }

    fn finalize(self) -> Result<Vec<u8>, ReportError> {
        Ok(b"recorded".to_vec())
    }
}

/// Catalog backed by fixed name-to-samples maps. Samples are spaced one
/// second apart from the epoch, inside any window starting at zero.
pub struct InMemoryCatalog {
    names: Vec<String>,
    samples: HashMap<String, Vec<SeriesSample>>,
    fail: bool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            samples: HashMap::new(),
            fail: false,
        }
    }

    pub fn with_meter(mut self, full_name: &str, values: &[f64]) -> Self {
        let samples = values
            .iter()
            .enumerate()
            .map(|(i, v)| SeriesSample::new(i as i64 * 1_000, *v))
            .collect();
        self.names.push(full_name.to_string());
        self.samples.insert(full_name.to_string(), samples);
        self
    }

    pub fn unavailable() -> Self {
        Self {
            names: Vec::new(),
            samples: HashMap::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl StatisticsCatalog for InMemoryCatalog {
    async fn statistics_names(&self) -> anyhow::Result<Vec<String>> {
        if self.fail {
            anyhow::bail!("statistics backend not configured");
        }
        Ok(self.names.clone())
    }

    async fn meter_samples(
        &self,
        full_name: &str,
        _window: &TimeWindow,
    ) -> anyhow::Result<Vec<SeriesSample>> {
        Ok(self.samples.get(full_name).cloned().unwrap_or_default())
    }
}
