// Statistics backend contract

use async_trait::async_trait;

use crate::domain::series::SeriesSample;
use crate::domain::window::TimeWindow;

#[async_trait]
pub trait StatisticsCatalog: Send + Sync {
    /// All full statistic names known to the backend. Names carry a
    /// two-digit cluster index prefix, e.g. "00|JVM|Memory|Heap Memory Free".
    async fn statistics_names(&self) -> anyhow::Result<Vec<String>>;

    /// Samples for one full statistic name over the window, ordered by
    /// timestamp.
    async fn meter_samples(
        &self,
        full_name: &str,
        window: &TimeWindow,
    ) -> anyhow::Result<Vec<SeriesSample>>;
}
