//! Cost-of-living-adjustment calculation.
//!
//! Salaries in the COLA window receive a flat step-up, then either a flat
//! increase (at or above the threshold) or a percentage increase (below it).
//! The threshold is a hard cliff: a stepped-up salary exactly equal to it
//! takes the flat increase.

use rust_decimal::Decimal;

use crate::config::ColaPolicy;

/// The result of applying the COLA policy to a salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColaOutcome {
    /// `original_salary + step_up`.
    pub cola_base: Decimal,
    /// The salary after the COLA increase.
    pub cola_adjusted: Decimal,
    /// True when `cola_base` reached the threshold and the flat increase applied.
    pub threshold_reached: bool,
}

/// Applies the COLA policy to `original_salary`.
///
/// # Examples
///
/// ```
/// use salary_inflation::calculation::apply_cola;
/// use salary_inflation::config::ColaPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = ColaPolicy::default();
///
/// // 67000 + 8000 = 75000 reaches the threshold: +3000
/// let high = apply_cola(Decimal::new(67000, 0), &policy);
/// assert_eq!(high.cola_adjusted, Decimal::new(78000, 0));
///
/// // 66999 + 8000 = 74999 is below it: x 1.04
/// let low = apply_cola(Decimal::new(66999, 0), &policy);
/// assert_eq!(low.cola_adjusted, Decimal::new(7799896, 2));
/// ```
pub fn apply_cola(original_salary: Decimal, policy: &ColaPolicy) -> ColaOutcome {
    let cola_base = original_salary + policy.step_up;
    let threshold_reached = cola_base >= policy.threshold;

    let cola_adjusted = if threshold_reached {
        cola_base + policy.flat_increase
    } else {
        cola_base * policy.percentage_multiplier
    };

    ColaOutcome {
        cola_base,
        cola_adjusted,
        threshold_reached,
    }
}
