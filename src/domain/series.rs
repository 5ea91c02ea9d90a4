// Meter time-series data models

/// One observed value of a meter at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSample {
    pub time_ms: i64,
    pub value: f64,
}

impl SeriesSample {
    pub fn new(time_ms: i64, value: f64) -> Self {
        Self { time_ms, value }
    }
}

/// Samples for one meter over the report window, ordered by timestamp.
#[derive(Debug, Clone)]
pub struct MeterSeries {
    pub meter: String,
    pub samples: Vec<SeriesSample>,
}

impl MeterSeries {
    pub fn new(meter: String, samples: Vec<SeriesSample>) -> Self {
        Self { meter, samples }
    }

    pub fn empty(meter: String) -> Self {
        Self {
            meter,
            samples: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest observed value, never below zero. An empty series has no
    /// vertical extent.
    pub fn peak(&self) -> f64 {
        self.samples.iter().map(|s| s.value).fold(0.0, f64::max)
    }
}

/// Index of the series that sets the value-axis scale for a graph: the
/// largest peak wins, ties go to the series listed first.
pub fn dominant_series(series: &[MeterSeries]) -> Option<usize> {
    let mut dominant: Option<usize> = None;
    for (index, candidate) in series.iter().enumerate() {
        match dominant {
            None => dominant = Some(index),
            Some(best) if candidate.peak() > series[best].peak() => dominant = Some(index),
            _ => {}
        }
    }
    dominant
}
