//! Application state for the salary inflation API.

use std::sync::Arc;

use crate::calculation::SalaryCalculator;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the salary calculator, and through it the CPI resolver and its
/// series cache, shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<SalaryCalculator>,
}

impl AppState {
    /// Creates a new application state around a calculator.
    pub fn new(calculator: SalaryCalculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }

    /// Creates a state wired to the configured cache and provider.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(SalaryCalculator::from_config(config))
    }

    /// Returns the salary calculator.
    pub fn calculator(&self) -> &SalaryCalculator {
        &self.calculator
    }
}
