use serde::Deserialize;

use crate::domain::graph::{MeterGraph, MeterGraphPage};
use crate::domain::layout::GraphSize;

#[derive(Debug, Deserialize, Clone)]
pub struct StatisticsConfig {
    pub statistics: StatisticsSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatisticsSettings {
    pub host: String,
    pub token: String,
    pub database: String,
    pub retention_policy: String,
    #[serde(default)]
    pub server_index: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GraphPagesConfig {
    #[serde(default)]
    pub pages: Vec<PageConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageConfig {
    pub name: String,
    pub graph_size: Option<String>,
    #[serde(default)]
    pub graphs: Vec<GraphConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GraphConfig {
    pub name: String,
    #[serde(default)]
    pub meters: Vec<String>,
}

pub fn load_statistics_config() -> anyhow::Result<StatisticsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/statistics"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_graph_pages_config() -> anyhow::Result<GraphPagesConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/graphs"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

impl GraphPagesConfig {
    /// The named report page. An unknown name yields an empty page so the
    /// report degenerates to a header-only document instead of failing.
    pub fn page(&self, name: &str) -> MeterGraphPage {
        self.pages
            .iter()
            .find(|page| page.name == name)
            .map(PageConfig::to_page)
            .unwrap_or_else(|| MeterGraphPage::empty(name.to_string()))
    }
}

impl PageConfig {
    fn to_page(&self) -> MeterGraphPage {
        let graph_size = match self.graph_size.as_deref() {
            Some("compact") => GraphSize::COMPACT,
            _ => GraphSize::NORMAL,
        };
        MeterGraphPage {
            name: self.name.clone(),
            graph_size,
            graphs: self
                .graphs
                .iter()
                .map(|graph| MeterGraph::new(graph.name.clone(), graph.meters.clone()))
                .collect(),
        }
    }
}
