//! HTTP API module for the salary inflation engine.
//!
//! This module provides the REST endpoints for re-valuing a historical
//! salary against CPI data and the COLA policy.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EARLIEST_CPI_YEAR, InflationRequest};
pub use response::{ApiError, ApiErrorResponse, CALCULATION_FAILED_MESSAGE};
pub use state::AppState;
