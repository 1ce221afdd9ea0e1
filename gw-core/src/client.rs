//! HTTP client for the GamerWrapped backend.
//!
//! Two endpoints are consumed:
//! - `GET {base}/api/stats?year={year}` returns a JSON [`YearStats`]
//! - `GET {base}/api/charts/{id}?year={year}&orientation={vertical|horizontal}`
//!   returns a pre-rendered PNG
//!
//! Requests are made once; there is no retry and no timeout beyond the
//! transport default.

use crate::chart::{ChartId, Orientation};
use crate::config::Config;
use crate::error::{GwError, Result};
use crate::models::YearStats;
use log::{debug, info};
use reqwest::Client;

/// URL of a pre-rendered chart image. Pure; performs no I/O.
pub fn chart_image_url(api_url: &str, chart: ChartId, year: i32, orientation: Orientation) -> String {
    format!(
        "{}/api/charts/{}?year={}&orientation={}",
        api_url,
        chart.as_str(),
        year,
        orientation.as_query()
    )
}

/// Thin wrapper around `reqwest::Client` bound to one backend.
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: Client,
    api_url: String,
}

impl StatsClient {
    pub fn new(config: &Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: &Config) -> Self {
        Self {
            http,
            api_url: config.api_url().to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn stats_url(&self, year: i32) -> String {
        format!("{}/api/stats?year={}", self.api_url, year)
    }

    pub fn chart_image_url(&self, chart: ChartId, year: i32, orientation: Orientation) -> String {
        chart_image_url(&self.api_url, chart, year, orientation)
    }

    /// Fetch the statistics for one year.
    ///
    /// A payload whose `year` differs from the requested one is rejected as a
    /// response error.
    pub async fn fetch_year_stats(&self, year: i32) -> Result<YearStats> {
        let url = self.stats_url(year);
        debug!("GET {}", url);

        let body = self.get_bytes(&url).await?;
        let stats: YearStats = serde_json::from_slice(&body).map_err(|e| GwError::Response {
            url: url.clone(),
            reason: format!("malformed stats payload: {}", e),
        })?;

        if stats.year != year {
            return Err(GwError::Response {
                url,
                reason: format!("expected stats for {}, got {}", year, stats.year),
            });
        }

        info!(
            "Loaded stats for {} ({} games, {} consoles)",
            year,
            stats.most_played_games.len(),
            stats.most_played_consoles.len()
        );
        Ok(stats)
    }

    /// Download the raw bytes of a chart image.
    pub async fn download_chart_image(
        &self,
        chart: ChartId,
        year: i32,
        orientation: Orientation,
    ) -> Result<Vec<u8>> {
        let url = self.chart_image_url(chart, year, orientation);
        debug!("GET {}", url);
        let bytes = self.get_bytes(&url).await?;
        if bytes.is_empty() {
            return Err(GwError::Response {
                url,
                reason: "empty image body".to_string(),
            });
        }
        Ok(bytes)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let transport = |source| GwError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(GwError::Response {
                url: url.to_string(),
                reason: format!("status {}", status),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        Ok(body.to_vec())
    }
}
