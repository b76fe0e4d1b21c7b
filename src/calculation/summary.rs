//! Human-readable summaries of adjustment results.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{Regime, SalaryAdjustment};

/// Formats an amount as whole dollars with thousands separators.
///
/// # Examples
///
/// ```
/// use salary_inflation::calculation::format_dollars;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_dollars(Decimal::new(10265612, 2)), "$102,656");
/// assert_eq!(format_dollars(Decimal::new(950, 0)), "$950");
/// ```
pub fn format_dollars(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    if rounded.is_zero() {
        return "$0".to_string();
    }

    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if rounded.is_sign_negative() {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Builds the summary sentence for an adjustment.
///
/// The COLA regime has two phrasings: one reporting a de facto pay cut when
/// inflation outpaced the COLA outcome, and one for when COLA kept pace.
pub fn summarize(
    regime: Regime,
    start_date: NaiveDate,
    original_salary: Decimal,
    adjustment: &SalaryAdjustment,
) -> String {
    let year = start_date.year();
    let original = format_dollars(original_salary);
    let adjusted = format_dollars(adjustment.inflation_adjusted());

    match (regime, adjustment) {
        (
            Regime::ColaWindow,
            SalaryAdjustment::WithCola {
                cola_adjusted,
                defacto_paycut,
                ..
            },
        ) => {
            let cola = format_dollars(*cola_adjusted);
            if *defacto_paycut > Decimal::ZERO {
                format!(
                    "Your salary started at {} in {}. After COLA adjustments, your effective \
                     salary is {}. However, true inflation suggests it should be {}, resulting \
                     in a de facto pay cut of {}.",
                    original,
                    year,
                    cola,
                    adjusted,
                    format_dollars(defacto_paycut.abs())
                )
            } else {
                format!(
                    "Your salary started at {} in {}. After COLA adjustments to {}, your \
                     purchasing power has kept pace with or exceeded inflation ({} \
                     inflation-adjusted value).",
                    original, year, cola, adjusted
                )
            }
        }
        (Regime::PostWindow, _) => format!(
            "Your salary of {} from {} would be worth approximately {} in today's purchasing \
             power when adjusted for inflation.",
            original, year, adjusted
        ),
        _ => format!(
            "Your original salary of {} from {} would be worth approximately {} today when \
             adjusted for inflation using official CPI data.",
            original, year, adjusted
        ),
    }
}
