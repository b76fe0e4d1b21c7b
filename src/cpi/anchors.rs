//! Built-in CPI-U anchor tables (1982-84=100).
//!
//! Annual anchors are approximate annual averages used when the provider is
//! unreachable; years between anchors are interpolated. Monthly anchors are
//! exact not-seasonally-adjusted values for benchmark periods and take
//! precedence over annual figures when a request falls in one of those months.

/// Annual-average anchors, sorted by year.
pub static ANNUAL_ANCHORS: &[(i32, f64)] = &[
    (1913, 9.9),
    (1920, 20.0),
    (1930, 16.7),
    (1940, 14.0),
    (1950, 24.1),
    (1960, 29.6),
    (1970, 38.8),
    (1980, 82.4),
    (1990, 130.7),
    (1991, 136.2),
    (1995, 152.4),
    (2000, 172.2),
    (2005, 195.3),
    (2010, 218.1),
    (2015, 237.0),
    (2020, 258.8),
    (2021, 271.0),
    (2022, 292.7),
    (2023, 307.0),
    (2024, 310.3),
];

/// Monthly anchors as `(year, month, value)`, sorted by period.
pub static MONTHLY_ANCHORS: &[(i32, u32, f64)] = &[
    (1985, 6, 107.6),
    (1990, 12, 133.8),
    (1991, 1, 134.6),
    (1995, 3, 151.4),
    (2000, 1, 168.8),
    (2010, 6, 218.011),
    (2014, 8, 237.852),
    (2020, 1, 257.971),
    (2021, 12, 278.802),
    (2022, 1, 281.148),
    (2024, 12, 315.605),
];

/// Returns the monthly anchor for `(year, month)`, if one is embedded.
pub fn monthly_anchor(year: i32, month: u32) -> Option<f64> {
    MONTHLY_ANCHORS
        .binary_search_by(|&(y, m, _)| (y, m).cmp(&(year, month)))
        .ok()
        .map(|index| MONTHLY_ANCHORS[index].2)
}
