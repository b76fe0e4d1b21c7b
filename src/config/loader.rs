//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{ColaPolicy, EngineConfig, ResolverConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/cpi_u/
/// ├── resolver.yaml     # Series id, provider URL, timeout, cache, reference period
/// └── cola_policy.yaml  # COLA window and threshold constants
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_inflation::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/cpi_u").unwrap();
/// println!("Reference year: {}", loader.resolver().reference_year);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if either YAML file is missing
    /// - `ConfigParseError` if a file is malformed or its values are inconsistent
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let resolver_path = path.join("resolver.yaml");
        let resolver = Self::load_yaml::<ResolverConfig>(&resolver_path)?;
        if !(1..=12).contains(&resolver.reference_month) {
            return Err(EngineError::ConfigParseError {
                path: resolver_path.display().to_string(),
                message: format!(
                    "reference_month must be between 1 and 12, got {}",
                    resolver.reference_month
                ),
            });
        }

        let policy_path = path.join("cola_policy.yaml");
        let cola_policy = Self::load_yaml::<ColaPolicy>(&policy_path)?;
        if cola_policy.window_start > cola_policy.window_end {
            return Err(EngineError::ConfigParseError {
                path: policy_path.display().to_string(),
                message: format!(
                    "window_start {} is after window_end {}",
                    cola_policy.window_start, cola_policy.window_end
                ),
            });
        }

        Ok(Self {
            config: EngineConfig::new(resolver, cola_policy),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the resolver settings.
    pub fn resolver(&self) -> &ResolverConfig {
        self.config.resolver()
    }

    /// Returns the COLA policy.
    pub fn cola_policy(&self) -> &ColaPolicy {
        self.config.cola_policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/cpi_u"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn write_config(dir: &Path, resolver: &str, policy: &str) {
        fs::write(dir.join("resolver.yaml"), resolver).unwrap();
        fs::write(dir.join("cola_policy.yaml"), policy).unwrap();
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.resolver().series_id, "CUUR0000SA0");
        assert_eq!(loader.resolver().reference_year, 2024);
        assert_eq!(loader.resolver().reference_month, 12);
        assert_eq!(loader.resolver().timeout_secs, 10);
    }

    #[test]
    fn test_shipped_policy_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.cola_policy(), &ColaPolicy::default());
        assert_eq!(loader.cola_policy().step_up, dec("8000"));
        assert_eq!(loader.cola_policy().threshold, dec("75000"));
        assert_eq!(loader.cola_policy().flat_increase, dec("3000"));
        assert_eq!(loader.cola_policy().percentage_multiplier, dec("1.04"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("resolver.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_invalid_reference_month_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "reference_year: 2024\nreference_month: 13\n",
            "",
        );

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("resolver.yaml"));
                assert!(message.contains("13"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_cola_window_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "reference_year: 2024\nreference_month: 12\n",
            "window_start: 2021-12-31\nwindow_end: 1991-01-01\nstep_up: \"8000\"\n\
             threshold: \"75000\"\nflat_increase: \"3000\"\npercentage_multiplier: \"1.04\"\n",
        );

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("cola_policy.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "reference_year: [unterminated\n", "");

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(EngineError::ConfigParseError { .. })
        ));
    }
}
