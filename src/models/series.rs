//! Time-series payload models.
//!
//! These types mirror the response shape of the public CPI time-series API:
//!
//! ```text
//! {status, Results: {series: [{seriesID, data: [{year, period, value}, ...]}]}}
//! ```
//!
//! Cached, remote and synthesized payloads all share this shape, so code that
//! reads values out of a payload never needs to know where it came from.
//! Fields the engine does not use are kept in `extra` maps so a payload
//! written to the cache reads back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status sentinel the provider uses for a successful request.
pub const REQUEST_SUCCEEDED: &str = "REQUEST_SUCCEEDED";

/// Period code the provider uses for an annual average.
pub const ANNUAL_AVERAGE_PERIOD: &str = "M13";

/// The period of a single observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// A calendar month, 1-12.
    Month(u32),
    /// The annual average (`M13`).
    AnnualAverage,
}

impl Period {
    /// Returns the provider's period code, e.g. `M06` or `M13`.
    ///
    /// ```
    /// use salary_inflation::models::Period;
    ///
    /// assert_eq!(Period::Month(6).code(), "M06");
    /// assert_eq!(Period::AnnualAverage.code(), "M13");
    /// ```
    pub fn code(&self) -> String {
        match self {
            Period::Month(month) => format!("M{:02}", month),
            Period::AnnualAverage => ANNUAL_AVERAGE_PERIOD.to_string(),
        }
    }
}

/// A single observation in a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// The year, as the provider sends it (a string).
    pub year: String,
    /// The period code (`M01`..`M12`, or `M13` for the annual average).
    pub period: String,
    /// The index value, as a decimal string.
    pub value: String,
    /// Fields not used by the engine (period names, footnotes, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DataPoint {
    /// Creates an annual-average data point.
    pub fn annual(year: i32, value: f64) -> Self {
        Self {
            year: year.to_string(),
            period: ANNUAL_AVERAGE_PERIOD.to_string(),
            value: value.to_string(),
            extra: Map::new(),
        }
    }
}

/// One series inside a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// The series identifier.
    #[serde(rename = "seriesID")]
    pub series_id: String,
    /// Observations, in the provider's order.
    #[serde(default)]
    pub data: Vec<DataPoint>,
}

/// The `Results` object of a payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesResults {
    /// All series returned for the request.
    #[serde(default)]
    pub series: Vec<Series>,
}

/// A full provider response for one year range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPayload {
    /// Provider status, `REQUEST_SUCCEEDED` on success.
    pub status: String,
    /// The series results. Absent on some provider failures.
    #[serde(rename = "Results", default, skip_serializing_if = "Option::is_none")]
    pub results: Option<SeriesResults>,
    /// Fields not used by the engine (messages, response time, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SeriesPayload {
    /// Builds a successful single-series payload from annual values.
    pub fn annual<I>(series_id: &str, points: I) -> Self
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        let data = points
            .into_iter()
            .map(|(year, value)| DataPoint::annual(year, value))
            .collect();

        Self {
            status: REQUEST_SUCCEEDED.to_string(),
            results: Some(SeriesResults {
                series: vec![Series {
                    series_id: series_id.to_string(),
                    data,
                }],
            }),
            extra: Map::new(),
        }
    }

    /// Returns true when the provider reported success.
    pub fn is_success(&self) -> bool {
        self.status == REQUEST_SUCCEEDED
    }

    /// Returns the first series, if any.
    pub fn first_series(&self) -> Option<&Series> {
        self.results.as_ref()?.series.first()
    }

    /// Returns the provider's `message` entries, if it sent any.
    pub fn messages(&self) -> Vec<String> {
        match self.extra.get("message") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            Some(Value::String(message)) => vec![message.clone()],
            _ => Vec::new(),
        }
    }
}
