//! Request types for the salary inflation API.
//!
//! This module defines the JSON request structure for the
//! `/api/calculate-inflation` endpoint and its validation into an
//! [`AdjustmentRequest`].

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::AdjustmentRequest;

/// Earliest year with published index data.
pub const EARLIEST_CPI_YEAR: i32 = 1913;

/// Request body for the `/api/calculate-inflation` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationRequest {
    /// The employment start date as `YYYY-MM-DD`.
    pub start_date: String,
    /// The annual salary at the start date.
    pub original_salary: f64,
}

impl InflationRequest {
    /// Validates the request against `today` and converts it to an engine request.
    ///
    /// Checks run in order: date format, not in the future, not before
    /// 1913, salary strictly positive.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` naming the first field that failed.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_inflation::api::InflationRequest;
    /// use chrono::NaiveDate;
    ///
    /// let request = InflationRequest {
    ///     start_date: "2000-01-15".to_string(),
    ///     original_salary: 50000.0,
    /// };
    /// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// assert!(request.validate(today).is_ok());
    /// ```
    pub fn validate(&self, today: NaiveDate) -> EngineResult<AdjustmentRequest> {
        let start_date = NaiveDate::parse_from_str(self.start_date.trim(), "%Y-%m-%d")
            .map_err(|_| invalid("start_date", "Date must be in YYYY-MM-DD format"))?;

        if start_date > today {
            return Err(invalid("start_date", "Start date cannot be in the future"));
        }
        if start_date.year() < EARLIEST_CPI_YEAR {
            return Err(invalid(
                "start_date",
                "Start date cannot be before 1913 (CPI data not available)",
            ));
        }

        if !self.original_salary.is_finite() || self.original_salary <= 0.0 {
            return Err(invalid(
                "original_salary",
                "Original salary must be greater than 0",
            ));
        }
        let original_salary = Decimal::try_from(self.original_salary)
            .map_err(|_| invalid("original_salary", "Original salary is out of range"))?;

        Ok(AdjustmentRequest {
            start_date,
            original_salary,
        })
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidRequest {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    fn request(start_date: &str, original_salary: f64) -> InflationRequest {
        InflationRequest {
            start_date: start_date.to_string(),
            original_salary,
        }
    }

    fn assert_invalid(result: EngineResult<AdjustmentRequest>, field: &str, message: &str) {
        match result {
            Err(EngineError::InvalidRequest {
                field: actual_field,
                message: actual_message,
            }) => {
                assert_eq!(actual_field, field);
                assert_eq!(actual_message, message);
            }
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request_converts() {
        let validated = request("1995-03-15", 70000.0).validate(today()).unwrap();

        assert_eq!(
            validated.start_date,
            NaiveDate::from_ymd_opt(1995, 3, 15).unwrap()
        );
        assert_eq!(validated.original_salary, Decimal::new(70000, 0));
    }

    #[test]
    fn test_bad_date_format() {
        for date in ["15/03/1995", "1995-13-01", "", "1995-02-30"] {
            assert_invalid(
                request(date, 70000.0).validate(today()),
                "start_date",
                "Date must be in YYYY-MM-DD format",
            );
        }
    }

    #[test]
    fn test_future_date_rejected() {
        assert_invalid(
            request("2025-07-01", 70000.0).validate(today()),
            "start_date",
            "Start date cannot be in the future",
        );
        assert!(request("2025-06-30", 70000.0).validate(today()).is_ok());
    }

    #[test]
    fn test_date_before_1913_rejected() {
        assert_invalid(
            request("1912-12-31", 70000.0).validate(today()),
            "start_date",
            "Start date cannot be before 1913 (CPI data not available)",
        );
        assert!(request("1913-01-01", 70000.0).validate(today()).is_ok());
    }

    #[test]
    fn test_non_positive_salary_rejected() {
        for salary in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_invalid(
                request("2000-01-15", salary).validate(today()),
                "original_salary",
                "Original salary must be greater than 0",
            );
        }
    }

    #[test]
    fn test_date_checked_before_salary() {
        assert_invalid(
            request("not-a-date", -5.0).validate(today()),
            "start_date",
            "Date must be in YYYY-MM-DD format",
        );
    }
}
