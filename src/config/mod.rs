//! Configuration loading and management for the salary inflation engine.
//!
//! This module loads resolver settings (series id, provider endpoint, fetch
//! timeout, cache location, reference period) and the COLA policy constants
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salary_inflation::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/cpi_u").unwrap();
//! println!("Series: {}", config.resolver().series_id);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ColaPolicy, DEFAULT_API_URL, DEFAULT_SERIES_ID, EngineConfig, ResolverConfig};
