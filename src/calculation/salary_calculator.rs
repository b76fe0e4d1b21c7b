//! Salary adjustment: inflation re-valuation plus the COLA regime rules.
//!
//! [`adjust_salary`] is the pure rules engine: given an inflation rate it
//! classifies the start date, applies the regime's formula and rounds the
//! result. [`SalaryCalculator`] pairs it with a [`CpiResolver`] to obtain
//! the rate.

use std::time::Instant;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::{ColaPolicy, ConfigLoader};
use crate::cpi::CpiResolver;
use crate::error::{EngineError, EngineResult};
use crate::models::{AdjustmentRequest, AdjustmentResult, Regime, SalaryAdjustment};

use super::cola::apply_cola;
use super::regime::{category_label, classify_regime};
use super::summary::summarize;

/// Computes the unrounded adjustment for a regime.
///
/// # Errors
///
/// Returns `CalculationError` if the arithmetic overflows the decimal range.
pub fn compute_adjustment(
    regime: Regime,
    original_salary: Decimal,
    inflation_rate: Decimal,
    policy: &ColaPolicy,
) -> EngineResult<SalaryAdjustment> {
    let inflation_adjusted = (Decimal::ONE + inflation_rate)
        .checked_mul(original_salary)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "inflation-adjusted salary overflows for {} at rate {}",
                original_salary, inflation_rate
            ),
        })?;

    Ok(match regime {
        Regime::PreWindow | Regime::PostWindow => SalaryAdjustment::Simple { inflation_adjusted },
        Regime::ColaWindow => {
            let cola = apply_cola(original_salary, policy);
            SalaryAdjustment::WithCola {
                inflation_adjusted,
                cola_adjusted: cola.cola_adjusted,
                defacto_paycut: inflation_adjusted - cola.cola_adjusted,
            }
        }
    })
}

/// Applies the regime rules to a request given an already-resolved rate.
///
/// # Examples
///
/// ```
/// use salary_inflation::calculation::adjust_salary;
/// use salary_inflation::config::ColaPolicy;
/// use salary_inflation::models::AdjustmentRequest;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = AdjustmentRequest {
///     start_date: NaiveDate::from_ymd_opt(2000, 1, 15).unwrap(),
///     original_salary: Decimal::new(50000, 0),
/// };
/// let result = adjust_salary(&request, Decimal::new(5, 1), 24, &ColaPolicy::default()).unwrap();
///
/// assert_eq!(result.category, "1991-2021 Employment (COLA Period)");
/// assert_eq!(result.inflation_adjusted_salary, Decimal::new(75000, 0));
/// assert_eq!(result.cola_adjusted_salary, Some(Decimal::new(60320, 0)));
/// assert_eq!(result.defacto_paycut, Some(Decimal::new(14680, 0)));
/// ```
pub fn adjust_salary(
    request: &AdjustmentRequest,
    inflation_rate: Decimal,
    years_elapsed: i32,
    policy: &ColaPolicy,
) -> EngineResult<AdjustmentResult> {
    let regime = classify_regime(request.start_date, policy);
    let adjustment = compute_adjustment(regime, request.original_salary, inflation_rate, policy)?;
    let summary = summarize(
        regime,
        request.start_date,
        request.original_salary,
        &adjustment,
    );

    Ok(AdjustmentResult::from_adjustment(
        request,
        adjustment,
        category_label(regime, policy),
        summary,
        inflation_rate,
        years_elapsed,
    ))
}

/// Re-values salaries using resolved CPI data and the COLA policy.
///
/// # Example
///
/// ```no_run
/// use salary_inflation::calculation::SalaryCalculator;
/// use salary_inflation::config::ConfigLoader;
/// use salary_inflation::models::AdjustmentRequest;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// # async fn run() -> salary_inflation::error::EngineResult<()> {
/// let config = ConfigLoader::load("./config/cpi_u")?;
/// let calculator = SalaryCalculator::from_config(&config);
///
/// let result = calculator
///     .calculate(&AdjustmentRequest {
///         start_date: NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
///         original_salary: Decimal::new(35000, 0),
///     })
///     .await?;
/// println!("{}", result.summary);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SalaryCalculator {
    resolver: CpiResolver,
    policy: ColaPolicy,
}

impl SalaryCalculator {
    /// Creates a calculator from a resolver and a COLA policy.
    pub fn new(resolver: CpiResolver, policy: ColaPolicy) -> Self {
        Self { resolver, policy }
    }

    /// Creates a calculator wired to the configured cache and provider.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(
            CpiResolver::from_config(config.resolver()),
            config.cola_policy().clone(),
        )
    }

    /// Returns the CPI resolver.
    pub fn resolver(&self) -> &CpiResolver {
        &self.resolver
    }

    /// Returns the COLA policy.
    pub fn policy(&self) -> &ColaPolicy {
        &self.policy
    }

    /// Re-values the request's salary to the reference period.
    ///
    /// # Errors
    ///
    /// - `IndexUnavailable` if no usable index could be resolved
    /// - `CalculationError` if the rate or salary falls outside decimal range
    pub async fn calculate(&self, request: &AdjustmentRequest) -> EngineResult<AdjustmentResult> {
        let started = Instant::now();
        let resolved = self.resolver.resolve_rate(request.start_date).await?;

        let inflation_rate =
            Decimal::try_from(resolved.inflation_rate).map_err(|e| EngineError::CalculationError {
                message: format!(
                    "inflation rate {} is not representable: {}",
                    resolved.inflation_rate, e
                ),
            })?;
        debug!(
            start_date = %request.start_date,
            inflation_rate = resolved.inflation_rate,
            estimated = resolved.estimated,
            "Resolved inflation rate"
        );

        let result = adjust_salary(request, inflation_rate, resolved.years_elapsed, &self.policy)?;

        info!(
            start_date = %request.start_date,
            category = %result.category,
            inflation_adjusted_salary = %result.inflation_adjusted_salary,
            years_elapsed = result.years_elapsed,
            duration_us = started.elapsed().as_micros() as u64,
            "Salary adjustment completed"
        );

        Ok(result)
    }
}
