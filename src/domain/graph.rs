// Logical graph definitions and their resolved series

use crate::domain::layout::GraphSize;
use crate::domain::series::{MeterSeries, dominant_series};

/// A configured grouping of meters drawn together as one chart.
#[derive(Debug, Clone)]
pub struct MeterGraph {
    pub name: String,
    pub meters: Vec<String>,
}

impl MeterGraph {
    pub fn new(name: String, meters: Vec<String>) -> Self {
        Self { name, meters }
    }
}

/// A named report: an ordered list of logical graphs plus the footprint
/// used for all of them.
#[derive(Debug, Clone)]
pub struct MeterGraphPage {
    pub name: String,
    pub graph_size: GraphSize,
    pub graphs: Vec<MeterGraph>,
}

impl MeterGraphPage {
    /// Placeholder for an unknown report name. Renders as a header-only
    /// document rather than an error.
    pub fn empty(name: String) -> Self {
        Self {
            name,
            graph_size: GraphSize::NORMAL,
            graphs: Vec::new(),
        }
    }
}

/// A logical graph with its fetched series and the index of the dominant
/// series that sets the value-axis scale.
#[derive(Debug, Clone)]
pub struct ResolvedGraph {
    pub title: String,
    pub series: Vec<MeterSeries>,
    pub dominant: Option<usize>,
}

impl ResolvedGraph {
    pub fn new(title: String, series: Vec<MeterSeries>) -> Self {
        let dominant = dominant_series(&series);
        Self {
            title,
            series,
            dominant,
        }
    }

    pub fn dominant(&self) -> Option<&MeterSeries> {
        self.dominant.map(|index| &self.series[index])
    }

    /// Peak of the dominant series; zero when the graph resolved no data.
    pub fn dominant_peak(&self) -> f64 {
        self.dominant().map(MeterSeries::peak).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::SeriesSample;

    #[test]
    fn test_resolved_graph_wires_dominance() {
        let graph = ResolvedGraph::new(
            "CPU".to_string(),
            vec![
                MeterSeries::new("user".to_string(), vec![SeriesSample::new(0, 0.4)]),
                MeterSeries::new("system".to_string(), vec![SeriesSample::new(0, 0.9)]),
            ],
        );
        assert_eq!(graph.dominant, Some(1));
        assert_eq!(graph.dominant_peak(), 0.9);
    }

    #[test]
    fn test_graph_without_series_has_zero_peak() {
        let graph = ResolvedGraph::new("empty".to_string(), Vec::new());
        assert_eq!(graph.dominant, None);
        assert_eq!(graph.dominant_peak(), 0.0);
    }
}
