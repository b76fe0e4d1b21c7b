//! Remote CPI time-series source.
//!
//! This module defines the [`SeriesSource`] trait the resolver fetches
//! through, and [`BlsClient`], its implementation against the public
//! time-series API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::ResolverConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::SeriesPayload;

/// A remote source of index series.
///
/// Any `Err` (transport failure, timeout, bad status, malformed body, or the
/// provider reporting a failure in its payload) is treated identically by the
/// resolver: it falls back to synthesized data.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// The series identifier this source serves.
    fn series_id(&self) -> &str;

    /// Fetches the series for the inclusive range `start_year..=end_year`.
    async fn fetch(&self, start_year: i32, end_year: i32) -> EngineResult<SeriesPayload>;
}

/// Request body understood by the time-series API.
#[derive(Debug, Serialize)]
struct SeriesRequest<'a> {
    seriesid: [&'a str; 1],
    startyear: String,
    endyear: String,
    annualaverage: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    registrationkey: Option<&'a str>,
}

/// Client for the public CPI time-series API.
///
/// # Example
///
/// ```no_run
/// use salary_inflation::config::ResolverConfig;
/// use salary_inflation::cpi::{BlsClient, SeriesSource};
///
/// # async fn run() -> salary_inflation::error::EngineResult<()> {
/// let client = BlsClient::new(&ResolverConfig::default());
/// let payload = client.fetch(2020, 2024).await?;
/// assert!(payload.is_success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BlsClient {
    client: Client,
    api_url: String,
    series_id: String,
    registration_key: Option<String>,
}

impl BlsClient {
    /// Creates a client from resolver settings.
    pub fn new(config: &ResolverConfig) -> Self {
        Self::with_endpoint(
            &config.api_url,
            &config.series_id,
            config.registration_key.clone(),
            config.timeout(),
        )
    }

    /// Creates a client for an explicit endpoint and timeout.
    pub fn with_endpoint(
        api_url: &str,
        series_id: &str,
        registration_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_url: api_url.to_string(),
            series_id: series_id.to_string(),
            registration_key,
        }
    }

    fn fetch_error(&self, message: impl Into<String>) -> EngineError {
        EngineError::SeriesFetch {
            series_id: self.series_id.clone(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl SeriesSource for BlsClient {
    fn series_id(&self) -> &str {
        &self.series_id
    }

    async fn fetch(&self, start_year: i32, end_year: i32) -> EngineResult<SeriesPayload> {
        let body = SeriesRequest {
            seriesid: [self.series_id.as_str()],
            startyear: start_year.to_string(),
            endyear: end_year.to_string(),
            annualaverage: true,
            registrationkey: self.registration_key.as_deref(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    self.fetch_error("request timed out")
                } else {
                    self.fetch_error(e.to_string())
                }
            })?
            .error_for_status()
            .map_err(|e| self.fetch_error(e.to_string()))?;

        let payload: SeriesPayload = response
            .json()
            .await
            .map_err(|e| self.fetch_error(format!("malformed payload: {}", e)))?;

        if !payload.is_success() {
            let messages = payload.messages();
            let detail = if messages.is_empty() {
                "Unknown error".to_string()
            } else {
                messages.join("; ")
            };
            return Err(self.fetch_error(format!("provider status {}: {}", payload.status, detail)));
        }

        Ok(payload)
    }
}
