//! CPI resolution for the salary inflation engine.
//!
//! This module obtains index values for arbitrary periods using a persistent
//! cache, the remote time-series provider, and built-in anchor tables with
//! interpolation and extrapolation when authoritative data is unavailable.

mod anchors;
mod cache;
mod interpolation;
mod resolver;
mod source;

pub use anchors::{ANNUAL_ANCHORS, MONTHLY_ANCHORS, monthly_anchor};
pub use cache::{CacheKey, InMemoryCache, JsonFileCache, SeriesCache};
pub use interpolation::{
    BACKWARD_EXTRAPOLATION_RATE, DEGENERATE_INDEX_VALUE, FORWARD_EXTRAPOLATION_RATE, interpolate,
    interpolate_in,
};
pub use resolver::{
    CpiResolver, ESTIMATED_ANNUAL_RATE, ReferencePeriod, ResolvedRate, estimated_rate,
    extract_value, resolve_index,
};
pub use source::{BlsClient, SeriesSource};
