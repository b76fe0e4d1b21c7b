//! Salary adjustment models.
//!
//! [`AdjustmentRequest`] is what the engine consumes, [`SalaryAdjustment`] is
//! the internal outcome of the regime rules, and [`AdjustmentResult`] is the
//! flat record handed back to the transport layer.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A validated request to re-value a historical salary.
///
/// The transport layer guarantees that `start_date` is not in the future and
/// not before 1913, and that `original_salary` is strictly positive. The
/// engine trusts these invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentRequest {
    /// The employment start date.
    pub start_date: NaiveDate,
    /// The annual salary at `start_date`.
    pub original_salary: Decimal,
}

/// The policy regime an employment start date falls into.
///
/// The three regimes partition every possible date: dates before the COLA
/// window, dates inside it (both ends inclusive), and dates after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Started before the COLA window opened.
    PreWindow,
    /// Started inside the COLA window.
    ColaWindow,
    /// Started after the COLA window closed.
    PostWindow,
}

/// The unrounded outcome of applying a regime's rules.
///
/// Only the COLA regime produces a COLA-adjusted salary and a pay cut, so the
/// two shapes are separate variants rather than optional fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryAdjustment {
    /// Plain inflation adjustment.
    Simple {
        /// `original_salary * (1 + inflation_rate)`.
        inflation_adjusted: Decimal,
    },
    /// Inflation adjustment compared against the COLA outcome.
    WithCola {
        /// `original_salary * (1 + inflation_rate)`.
        inflation_adjusted: Decimal,
        /// Salary after the COLA step-up and increase.
        cola_adjusted: Decimal,
        /// `inflation_adjusted - cola_adjusted`; negative when COLA over-compensated.
        defacto_paycut: Decimal,
    },
}

impl SalaryAdjustment {
    /// Returns the inflation-adjusted salary.
    pub fn inflation_adjusted(&self) -> Decimal {
        match self {
            SalaryAdjustment::Simple { inflation_adjusted }
            | SalaryAdjustment::WithCola {
                inflation_adjusted, ..
            } => *inflation_adjusted,
        }
    }
}

/// The result of a salary adjustment, in its wire shape.
///
/// `cola_adjusted_salary` and `defacto_paycut` are `Some` exactly when the
/// category is the COLA period. Currency values are rounded to 2 decimal
/// places and the rate to 4.
///
/// # Example
///
/// ```
/// use salary_inflation::models::{AdjustmentRequest, AdjustmentResult, SalaryAdjustment};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = AdjustmentRequest {
///     start_date: NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
///     original_salary: Decimal::new(35000, 0),
/// };
/// let adjustment = SalaryAdjustment::Simple {
///     inflation_adjusted: Decimal::new(10265612345, 5),
/// };
/// let result = AdjustmentResult::from_adjustment(
///     &request,
///     adjustment,
///     "Pre-1991 Employment".to_string(),
///     String::new(),
///     Decimal::new(19330321, 7),
///     39,
/// );
///
/// assert_eq!(result.inflation_adjusted_salary, Decimal::new(10265612, 2));
/// assert_eq!(result.inflation_rate, Decimal::new(19330, 4));
/// assert!(result.cola_adjusted_salary.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentResult {
    /// The salary as submitted.
    #[serde(with = "rust_decimal::serde::float")]
    pub original_salary: Decimal,
    /// The employment start date.
    pub start_date: NaiveDate,
    /// The salary re-valued to the reference period.
    #[serde(with = "rust_decimal::serde::float")]
    pub inflation_adjusted_salary: Decimal,
    /// The COLA-adjusted salary (COLA period only).
    #[serde(with = "rust_decimal::serde::float_option")]
    pub cola_adjusted_salary: Option<Decimal>,
    /// Inflation-adjusted minus COLA-adjusted salary (COLA period only).
    #[serde(with = "rust_decimal::serde::float_option")]
    pub defacto_paycut: Option<Decimal>,
    /// Human-readable regime label.
    pub category: String,
    /// Human-readable explanation of the result.
    pub summary: String,
    /// Total inflation between the start date and the reference period.
    #[serde(with = "rust_decimal::serde::float")]
    pub inflation_rate: Decimal,
    /// Whole years between the start year and the reference year.
    pub years_elapsed: i32,
}

impl AdjustmentResult {
    /// Flattens an adjustment into the wire shape, rounding every value once.
    pub fn from_adjustment(
        request: &AdjustmentRequest,
        adjustment: SalaryAdjustment,
        category: String,
        summary: String,
        inflation_rate: Decimal,
        years_elapsed: i32,
    ) -> Self {
        let (cola_adjusted_salary, defacto_paycut) = match adjustment {
            SalaryAdjustment::Simple { .. } => (None, None),
            SalaryAdjustment::WithCola {
                cola_adjusted,
                defacto_paycut,
                ..
            } => (
                Some(round_currency(cola_adjusted)),
                Some(round_currency(defacto_paycut)),
            ),
        };

        Self {
            original_salary: request.original_salary,
            start_date: request.start_date,
            inflation_adjusted_salary: round_currency(adjustment.inflation_adjusted()),
            cola_adjusted_salary,
            defacto_paycut,
            category,
            summary,
            inflation_rate: inflation_rate.round_dp(4),
            years_elapsed,
        }
    }
}

fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}
