//! Calculation logic for the salary inflation engine.
//!
//! This module contains regime classification against the COLA window, the
//! COLA step-up and increase rules, summary rendering, and the salary
//! calculator that ties them to resolved CPI data.

mod cola;
mod regime;
mod salary_calculator;
mod summary;

pub use cola::{ColaOutcome, apply_cola};
pub use regime::{category_label, classify_regime};
pub use salary_calculator::{SalaryCalculator, adjust_salary, compute_adjustment};
pub use summary::{format_dollars, summarize};
