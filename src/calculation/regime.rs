//! Regime classification for employment start dates.
//!
//! A start date falls into exactly one of three regimes relative to the COLA
//! window: before it, inside it (both boundaries inclusive), or after it.

use chrono::{Datelike, NaiveDate};

use crate::config::ColaPolicy;
use crate::models::Regime;

/// Classifies `start_date` against the COLA window of `policy`.
///
/// # Examples
///
/// ```
/// use salary_inflation::calculation::classify_regime;
/// use salary_inflation::config::ColaPolicy;
/// use salary_inflation::models::Regime;
/// use chrono::NaiveDate;
///
/// let policy = ColaPolicy::default();
/// let date = NaiveDate::from_ymd_opt(1991, 1, 1).unwrap();
/// assert_eq!(classify_regime(date, &policy), Regime::ColaWindow);
/// ```
pub fn classify_regime(start_date: NaiveDate, policy: &ColaPolicy) -> Regime {
    if start_date < policy.window_start {
        Regime::PreWindow
    } else if start_date > policy.window_end {
        Regime::PostWindow
    } else {
        Regime::ColaWindow
    }
}

/// Returns the human-readable category for a regime, e.g. `Pre-1991 Employment`.
pub fn category_label(regime: Regime, policy: &ColaPolicy) -> String {
    match regime {
        Regime::PreWindow => format!("Pre-{} Employment", policy.window_start.year()),
        Regime::ColaWindow => format!(
            "{}-{} Employment (COLA Period)",
            policy.window_start.year(),
            policy.window_end.year()
        ),
        Regime::PostWindow => format!("Post-{} Employment", policy.window_end.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_start_is_cola() {
        assert_eq!(
            classify_regime(date(1991, 1, 1), &ColaPolicy::default()),
            Regime::ColaWindow
        );
    }

    #[test]
    fn test_window_end_is_cola() {
        assert_eq!(
            classify_regime(date(2021, 12, 31), &ColaPolicy::default()),
            Regime::ColaWindow
        );
    }

    #[test]
    fn test_day_before_window_is_pre() {
        assert_eq!(
            classify_regime(date(1990, 12, 31), &ColaPolicy::default()),
            Regime::PreWindow
        );
    }

    #[test]
    fn test_day_after_window_is_post() {
        assert_eq!(
            classify_regime(date(2022, 1, 1), &ColaPolicy::default()),
            Regime::PostWindow
        );
    }

    #[test]
    fn test_earliest_index_date_is_pre() {
        assert_eq!(
            classify_regime(date(1913, 1, 1), &ColaPolicy::default()),
            Regime::PreWindow
        );
    }

    #[test]
    fn test_category_labels() {
        let policy = ColaPolicy::default();

        assert_eq!(
            category_label(Regime::PreWindow, &policy),
            "Pre-1991 Employment"
        );
        assert_eq!(
            category_label(Regime::ColaWindow, &policy),
            "1991-2021 Employment (COLA Period)"
        );
        assert_eq!(
            category_label(Regime::PostWindow, &policy),
            "Post-2021 Employment"
        );
    }

    proptest! {
        #[test]
        fn prop_regimes_partition_all_dates(days in 0i64..60_000) {
            let policy = ColaPolicy::default();
            let day = date(1913, 1, 1) + chrono::Duration::days(days);

            let pre = day < policy.window_start;
            let post = day > policy.window_end;
            let cola = !pre && !post;
            prop_assert_eq!([pre, cola, post].iter().filter(|&&held| held).count(), 1);

            let expected = if pre {
                Regime::PreWindow
            } else if post {
                Regime::PostWindow
            } else {
                Regime::ColaWindow
            };
            prop_assert_eq!(classify_regime(day, &policy), expected);
        }

        #[test]
        fn prop_classification_is_monotonic(a in 0i64..60_000, b in 0i64..60_000) {
            let policy = ColaPolicy::default();
            let origin = date(1913, 1, 1);
            let early = origin + chrono::Duration::days(a.min(b));
            let late = origin + chrono::Duration::days(a.max(b));

            let rank = |regime: Regime| match regime {
                Regime::PreWindow => 0,
                Regime::ColaWindow => 1,
                Regime::PostWindow => 2,
            };
            prop_assert!(rank(classify_regime(early, &policy)) <= rank(classify_regime(late, &policy)));
        }
    }
}
