// Series resolver - maps configured meter names onto backend statistics

use crate::application::statistics_catalog::StatisticsCatalog;
use crate::domain::graph::{MeterGraph, ResolvedGraph};
use crate::domain::series::MeterSeries;
use crate::domain::window::TimeWindow;

/// Resolves the meters of logical graphs against the backend catalog.
pub struct SeriesResolver<'a> {
    catalog: &'a dyn StatisticsCatalog,
    names: &'a [String],
    server_index: u32,
}

impl<'a> SeriesResolver<'a> {
    pub fn new(catalog: &'a dyn StatisticsCatalog, names: &'a [String], server_index: u32) -> Self {
        Self {
            catalog,
            names,
            server_index,
        }
    }

    /// Fetches every meter of the graph in configured order. A meter with
    /// no matching statistic or no data becomes an empty series, never an
    /// error: one silent backend must not abort the whole report.
    pub async fn resolve_graph(&self, graph: &MeterGraph, window: &TimeWindow) -> ResolvedGraph {
        let mut series = Vec::with_capacity(graph.meters.len());
        for meter in &graph.meters {
            series.push(self.resolve_meter(meter, window).await);
        }
        ResolvedGraph::new(graph.name.clone(), series)
    }

    async fn resolve_meter(&self, meter: &str, window: &TimeWindow) -> MeterSeries {
        let Some(full_name) = self.full_name(meter) else {
            tracing::debug!("Meter {} has no matching statistic", meter);
            return MeterSeries::empty(meter.to_string());
        };

        match self.catalog.meter_samples(full_name, window).await {
            Ok(samples) => MeterSeries::new(meter.to_string(), samples),
            Err(e) => {
                tracing::warn!("Fetching meter {} failed: {}", meter, e);
                MeterSeries::empty(meter.to_string())
            }
        }
    }

    /// Accepts an exact catalog match or the form prefixed with this
    /// server's cluster index.
    fn full_name(&self, meter: &str) -> Option<&'a str> {
        let prefixed = format!("{:02}|{}", self.server_index, meter);
        self.names
            .iter()
            .find(|name| name.as_str() == meter || name.as_str() == prefixed)
            .map(String::as_str)
    }
}
