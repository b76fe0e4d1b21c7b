//! CPI resolution: cached lookup, remote fetch, and synthesized fallback.
//!
//! The resolver never surfaces a data-source failure. A cache miss triggers a
//! remote fetch; if that fails for any reason the series is synthesized from
//! the built-in anchors instead. Index lookups degrade from an exact monthly
//! anchor, to a monthly observation in the payload, to the payload's annual
//! average, and finally to a flat 2.5%/year estimate of the rate.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info, warn};

use crate::config::ResolverConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Period, SeriesPayload};

use super::anchors::monthly_anchor;
use super::cache::{CacheKey, JsonFileCache, SeriesCache};
use super::interpolation::interpolate;
use super::source::{BlsClient, SeriesSource};

/// Annual rate used to estimate inflation when an index value is missing.
pub const ESTIMATED_ANNUAL_RATE: f64 = 0.025;

/// The period every salary is re-valued to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencePeriod {
    /// Reference year.
    pub year: i32,
    /// Reference month, 1-12.
    pub month: u32,
}

impl ReferencePeriod {
    /// Creates a reference period.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

/// The outcome of resolving an inflation rate for a start date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRate {
    /// `(index(reference) - index(start)) / index(start)`.
    pub inflation_rate: f64,
    /// `reference.year - start_date.year`.
    pub years_elapsed: i32,
    /// True when the rate came from the flat estimate rather than index values.
    pub estimated: bool,
}

/// Resolves CPI index values and inflation rates.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use salary_inflation::config::ResolverConfig;
/// use salary_inflation::cpi::{BlsClient, CpiResolver, InMemoryCache, ReferencePeriod};
///
/// let config = ResolverConfig::default();
/// let resolver = CpiResolver::new(
///     Arc::new(InMemoryCache::new()),
///     Arc::new(BlsClient::new(&config)),
///     ReferencePeriod::new(2024, 12),
/// );
///
/// let payload = resolver.synthesize_series(1990, 1991);
/// assert!(payload.is_success());
/// ```
#[derive(Clone)]
pub struct CpiResolver {
    cache: Arc<dyn SeriesCache>,
    source: Arc<dyn SeriesSource>,
    reference: ReferencePeriod,
}

impl CpiResolver {
    /// Creates a resolver over the given cache and source.
    pub fn new(
        cache: Arc<dyn SeriesCache>,
        source: Arc<dyn SeriesSource>,
        reference: ReferencePeriod,
    ) -> Self {
        Self {
            cache,
            source,
            reference,
        }
    }

    /// Creates a resolver with a file-backed cache and the remote API client.
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(
            Arc::new(JsonFileCache::new(&config.cache_path)),
            Arc::new(BlsClient::new(config)),
            ReferencePeriod::new(config.reference_year, config.reference_month),
        )
    }

    /// Returns the reference period.
    pub fn reference(&self) -> ReferencePeriod {
        self.reference
    }

    /// Returns the series identifier used for fetched and synthesized payloads.
    pub fn series_id(&self) -> &str {
        self.source.series_id()
    }

    /// Returns the series for `start_year..=end_year`.
    ///
    /// A cached payload is returned as-is. On a miss the remote source is
    /// tried; a successful fetch is written to the cache, any failure yields
    /// a synthesized series instead.
    pub async fn get_series(&self, start_year: i32, end_year: i32) -> SeriesPayload {
        let key = CacheKey::new(start_year, end_year);

        if let Some(payload) = self.cache.get(&key) {
            debug!(key = %key, "Series cache hit");
            return payload;
        }

        match self.source.fetch(start_year, end_year).await {
            Ok(payload) => {
                if let Err(error) = self.cache.put(&key, &payload) {
                    warn!(key = %key, error = %error, "Failed to write series cache");
                } else {
                    info!(key = %key, "Fetched and cached series");
                }
                payload
            }
            Err(error) => {
                warn!(
                    key = %key,
                    error = %error,
                    "Series fetch failed, using synthesized fallback series"
                );
                self.synthesize_series(start_year, end_year)
            }
        }
    }

    /// Builds an annual-average series for `start_year..=end_year` from the
    /// built-in anchors, shaped exactly like a provider payload.
    pub fn synthesize_series(&self, start_year: i32, end_year: i32) -> SeriesPayload {
        debug!(start_year, end_year, "Synthesizing series");
        SeriesPayload::annual(
            self.series_id(),
            (start_year..=end_year).map(|year| (year, interpolate(year))),
        )
    }

    /// Resolves the inflation rate from `start_date` to the reference period.
    ///
    /// # Errors
    ///
    /// Returns `IndexUnavailable` if the resolved values do not yield a finite
    /// rate. Fetch failures never surface here.
    pub async fn resolve_rate(&self, start_date: NaiveDate) -> EngineResult<ResolvedRate> {
        let start_year = start_date.year();
        let reference = self.reference;
        let years_elapsed = reference.year - start_year;

        let payload = self
            .get_series(start_year.min(reference.year), start_year.max(reference.year))
            .await;

        let start_index = resolve_index(&payload, start_year, start_date.month());
        let reference_index = resolve_index(&payload, reference.year, reference.month);

        let (inflation_rate, estimated) = match (start_index, reference_index) {
            (Some(start), Some(current)) => ((current - start) / start, false),
            _ => {
                warn!(
                    start_year,
                    reference_year = reference.year,
                    "Index value missing, estimating inflation at a flat annual rate"
                );
                (estimated_rate(years_elapsed), true)
            }
        };

        if !inflation_rate.is_finite() {
            return Err(EngineError::IndexUnavailable {
                year: start_year,
                message: format!("resolved inflation rate {} is not finite", inflation_rate),
            });
        }

        Ok(ResolvedRate {
            inflation_rate,
            years_elapsed,
            estimated,
        })
    }
}

/// Returns the value for `year` and `period` in `payload`.
///
/// Returns `None` rather than an error on any structural mismatch: no series,
/// no matching data point, or a value that is not a positive finite number.
pub fn extract_value(payload: &SeriesPayload, year: i32, period: Period) -> Option<f64> {
    let year = year.to_string();
    let period = period.code();

    payload
        .first_series()?
        .data
        .iter()
        .find(|point| point.year == year && point.period == period)
        .and_then(|point| point.value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
}

/// Returns the index for `(year, month)`: an embedded monthly anchor first,
/// then the payload's monthly observation, then its annual average.
pub fn resolve_index(payload: &SeriesPayload, year: i32, month: u32) -> Option<f64> {
    monthly_anchor(year, month)
        .or_else(|| extract_value(payload, year, Period::Month(month)))
        .or_else(|| extract_value(payload, year, Period::AnnualAverage))
}

/// Total inflation over `years` at the flat estimated annual rate.
pub fn estimated_rate(years: i32) -> f64 {
    (1.0 + ESTIMATED_ANNUAL_RATE).powi(years) - 1.0
}
