//! Interpolation and extrapolation over the annual anchor table.
//!
//! Years between two anchors are linearly interpolated. Years before the
//! first anchor are deflated at 3% a year from it; years after the last
//! anchor are inflated at 2.5% a year from it.

use super::anchors::ANNUAL_ANCHORS;

/// Annual rate used to extrapolate backwards from the earliest anchor.
pub const BACKWARD_EXTRAPOLATION_RATE: f64 = 0.03;

/// Annual rate used to extrapolate forwards from the latest anchor.
pub const FORWARD_EXTRAPOLATION_RATE: f64 = 0.025;

/// Value returned when the anchor table is empty.
pub const DEGENERATE_INDEX_VALUE: f64 = 250.0;

/// Returns the index value for `year` from the built-in annual anchors.
///
/// # Examples
///
/// ```
/// use salary_inflation::cpi::interpolate;
///
/// assert_eq!(interpolate(1990), 130.7);
/// // Halfway between the 1995 and 2000 anchors
/// assert!((interpolate(1997) - 160.32).abs() < 1e-9);
/// ```
pub fn interpolate(year: i32) -> f64 {
    interpolate_in(ANNUAL_ANCHORS, f64::from(year))
}

/// Returns the index value for a (possibly fractional) year from `anchors`.
///
/// `anchors` must be sorted by year with no duplicates.
pub fn interpolate_in(anchors: &[(i32, f64)], year: f64) -> f64 {
    let (Some(&(first_year, first_value)), Some(&(last_year, last_value))) =
        (anchors.first(), anchors.last())
    else {
        return DEGENERATE_INDEX_VALUE;
    };

    if year < f64::from(first_year) {
        let years_back = f64::from(first_year) - year;
        return first_value / (1.0 + BACKWARD_EXTRAPOLATION_RATE).powf(years_back);
    }

    if year > f64::from(last_year) {
        let years_forward = year - f64::from(last_year);
        return last_value * (1.0 + FORWARD_EXTRAPOLATION_RATE).powf(years_forward);
    }

    // First anchor strictly after `year`; the bracket is [upper - 1, upper].
    let upper = anchors.partition_point(|&(y, _)| f64::from(y) <= year);
    if upper == 0 {
        return DEGENERATE_INDEX_VALUE;
    }

    let (y1, v1) = anchors[upper - 1];
    if f64::from(y1) == year || upper == anchors.len() {
        return v1;
    }

    let (y2, v2) = anchors[upper];
    let ratio = (year - f64::from(y1)) / f64::from(y2 - y1);
    v1 + ratio * (v2 - v1)
}
