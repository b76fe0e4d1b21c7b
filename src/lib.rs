//! CPI-based salary inflation engine
//!
//! This crate re-values a historical salary to a fixed reference period using
//! the Consumer Price Index, and compares that against the salary a
//! cost-of-living-adjustment policy would have produced over the same span.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod cpi;
pub mod error;
pub mod models;
