//! Configuration types for the salary inflation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Default CPI-U "All Urban Consumers" series (1982-84=100).
pub const DEFAULT_SERIES_ID: &str = "CUUR0000SA0";

/// Default endpoint of the public time-series API.
pub const DEFAULT_API_URL: &str = "https://api.bls.gov/publicAPI/v2/timeseries/data/";

/// Settings for the CPI resolver.
///
/// The reference period is the "as-of" point every salary is re-valued to.
/// It is fixed configuration rather than wall-clock time so that results are
/// deterministic for a given build and cache.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResolverConfig {
    /// The series identifier requested from the provider.
    #[serde(default = "default_series_id")]
    pub series_id: String,
    /// The provider endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Upper bound on a single remote fetch, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Optional provider registration key.
    #[serde(default)]
    pub registration_key: Option<String>,
    /// Where the series cache is persisted.
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,
    /// Year of the reference period.
    pub reference_year: i32,
    /// Month (1-12) of the reference period.
    pub reference_month: u32,
}

fn default_series_id() -> String {
    DEFAULT_SERIES_ID.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("data/cpi_cache.json")
}

impl ResolverConfig {
    /// Returns the remote fetch timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            series_id: default_series_id(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            registration_key: None,
            cache_path: default_cache_path(),
            reference_year: 2024,
            reference_month: 12,
        }
    }
}

/// The cost-of-living-adjustment policy.
///
/// Employment starting inside `[window_start, window_end]` (both inclusive)
/// receives a flat `step_up`. If the stepped-up salary reaches `threshold`
/// it gets `flat_increase` added, otherwise it is multiplied by
/// `percentage_multiplier`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColaPolicy {
    /// First day of the COLA window.
    pub window_start: NaiveDate,
    /// Last day of the COLA window.
    pub window_end: NaiveDate,
    /// Fixed-dollar step-up applied to the original salary.
    pub step_up: Decimal,
    /// Stepped-up salary at or above which the flat increase applies.
    pub threshold: Decimal,
    /// Flat increase for stepped-up salaries at or above the threshold.
    pub flat_increase: Decimal,
    /// Multiplier for stepped-up salaries below the threshold.
    pub percentage_multiplier: Decimal,
}

impl Default for ColaPolicy {
    fn default() -> Self {
        Self {
            window_start: NaiveDate::from_ymd_opt(1991, 1, 1).unwrap_or_default(),
            window_end: NaiveDate::from_ymd_opt(2021, 12, 31).unwrap_or_default(),
            step_up: Decimal::new(8000, 0),
            threshold: Decimal::new(75000, 0),
            flat_increase: Decimal::new(3000, 0),
            percentage_multiplier: Decimal::new(104, 2),
        }
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// CPI resolver settings.
    resolver: ResolverConfig,
    /// COLA policy constants.
    cola_policy: ColaPolicy,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(resolver: ResolverConfig, cola_policy: ColaPolicy) -> Self {
        Self {
            resolver,
            cola_policy,
        }
    }

    /// Returns the resolver settings.
    pub fn resolver(&self) -> &ResolverConfig {
        &self.resolver
    }

    /// Returns the COLA policy.
    pub fn cola_policy(&self) -> &ColaPolicy {
        &self.cola_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_window() {
        let policy = ColaPolicy::default();
        assert_eq!(policy.window_start.to_string(), "1991-01-01");
        assert_eq!(policy.window_end.to_string(), "2021-12-31");
        assert_eq!(policy.percentage_multiplier, Decimal::new(104, 2));
    }

    #[test]
    fn test_resolver_fields_default_when_omitted() {
        let yaml = "reference_year: 2024\nreference_month: 12\n";
        let config: ResolverConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config, ResolverConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }
}
