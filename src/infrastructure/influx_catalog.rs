// InfluxDB-backed statistics catalog
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::application::statistics_catalog::StatisticsCatalog;
use crate::domain::series::SeriesSample;
use crate::domain::window::TimeWindow;

#[derive(Debug, Clone)]
pub struct InfluxCatalog {
    host: String,
    token: String,
    database: String,
    retention_policy: String,
}

#[derive(Debug, Deserialize)]
struct InfluxQLResponse {
    results: Vec<InfluxQLResult>,
}

#[derive(Debug, Deserialize)]
struct InfluxQLResult {
    #[serde(default)]
    series: Option<Vec<InfluxQLSeries>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InfluxQLSeries {
    columns: Vec<String>,
    values: Vec<Vec<serde_json::Value>>,
}

impl InfluxCatalog {
    pub fn new(host: String, token: String, database: String, retention_policy: String) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            token,
            database,
            retention_policy,
        }
    }

    fn build_query_url(&self, query: &str) -> String {
        let encoded_query = urlencoding::encode(query);
        format!(
            "{}/query?db={}&rp={}&q={}",
            self.host, self.database, self.retention_policy, encoded_query
        )
    }

    async fn execute_query(&self, query: &str) -> Result<InfluxQLResponse> {
        let url = self.build_query_url(query);
        tracing::debug!("Executing statistics query: {}", query);

        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .header("Authorization", format!("Token {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to InfluxDB")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("InfluxDB query failed with status {}: {}", status, body);
        }

        let data = response
            .json::<InfluxQLResponse>()
            .await
            .context("Failed to parse InfluxDB response")?;

        if let Some(result) = data.results.first() {
            if let Some(error) = &result.error {
                anyhow::bail!("InfluxDB query error: {}", error);
            }
        }

        Ok(data)
    }
}

#[async_trait]
impl StatisticsCatalog for InfluxCatalog {
    async fn statistics_names(&self) -> Result<Vec<String>> {
        let query = "SHOW TAG VALUES FROM meter WITH KEY = \"name\"";
        let response = self.execute_query(query).await?;
        Ok(collect_tag_values(&response))
    }

    async fn meter_samples(
        &self,
        full_name: &str,
        window: &TimeWindow,
    ) -> Result<Vec<SeriesSample>> {
        // Tag values are single-quoted in InfluxQL
        let escaped = full_name.replace('\'', "\\'");
        let query = format!(
            "SELECT value FROM meter WHERE \"name\" = '{}' AND time >= {}s AND time <= {}s",
            escaped, window.start, window.end
        );
        let response = self.execute_query(&query).await?;
        Ok(collect_samples(&response))
    }
}

/// Extract tag values from a SHOW TAG VALUES response. Rows are
/// [key, value] pairs.
fn collect_tag_values(response: &InfluxQLResponse) -> Vec<String> {
    let mut names = Vec::new();
    if let Some(result) = response.results.first() {
        if let Some(series_list) = &result.series {
            for series in series_list {
                for row in &series.values {
                    if row.len() >= 2 {
                        if let Some(name) = row[1].as_str() {
                            names.push(name.to_string());
                        }
                    }
                }
            }
        }
    }
    names
}

/// Extract timestamped samples from a SELECT response, locating the time
/// and value columns by name.
fn collect_samples(response: &InfluxQLResponse) -> Vec<SeriesSample> {
    let mut samples = Vec::new();
    if let Some(result) = response.results.first() {
        if let Some(series_list) = &result.series {
            for series in series_list {
                let time_idx = series.columns.iter().position(|c| c == "time").unwrap_or(0);
                let value_idx = series
                    .columns
                    .iter()
                    .position(|c| c == "value")
                    .unwrap_or(1);

                for row in &series.values {
                    if row.len() <= time_idx || row.len() <= value_idx {
                        continue;
                    }
                    if let (Some(time_str), Some(value)) =
                        (row[time_idx].as_str(), row[value_idx].as_f64())
                    {
                        if let Ok(time) = chrono::DateTime::parse_from_rfc3339(time_str) {
                            samples.push(SeriesSample::new(time.timestamp_millis(), value));
                        }
                    }
                }
            }
        }
    }
    samples
}
