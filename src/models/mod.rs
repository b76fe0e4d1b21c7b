//! Core data models for the salary inflation engine.
//!
//! This module contains the request and result types of the salary
//! adjustment engine and the time-series payload shape shared by the cache,
//! the remote provider and the synthesized fallback series.

mod adjustment;
mod series;

pub use adjustment::{AdjustmentRequest, AdjustmentResult, Regime, SalaryAdjustment};
pub use series::{
    ANNUAL_AVERAGE_PERIOD, DataPoint, Period, REQUEST_SUCCEEDED, Series, SeriesPayload,
    SeriesResults,
};
