//! Crash record normalization.
//!
//! The raw table arrives with month names as strings, numeric fields that may
//! be missing, and free-text columns that may be blank. [`normalize_rows`]
//! turns those rows into validated [`CrashRecord`]s, silently dropping
//! anything that cannot be normalized. Row defects are never errors: a bad
//! row is excluded from the snapshot and the rest of the table survives.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical month names, in calendar order. Anything outside this set is an
/// unrecognized month and excludes the row.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Map a month name to its 1-based number. Matching is exact on the trimmed
/// string; there is no fuzzy or abbreviated matching.
pub fn month_from_name(name: &str) -> Option<u32> {
    let trimmed = name.trim();
    MONTH_NAMES
        .iter()
        .position(|m| *m == trimmed)
        .map(|idx| (idx + 1) as u32)
}

/// One row of the source table, as deserialized from the CSV.
///
/// Everything is optional here: the cleaning pipeline that produced the file
/// leaves gaps, and numeric columns come through as floats (`2001.0`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCrashRow {
    #[serde(rename = "Year")]
    pub year: Option<f64>,
    #[serde(rename = "Month")]
    pub month: Option<String>,
    #[serde(rename = "Day")]
    pub day: Option<f64>,
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
    #[serde(rename = "Operator")]
    pub operator: Option<String>,
    #[serde(rename = "Aircraft")]
    pub aircraft: Option<String>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Country/Region")]
    pub country: Option<String>,
    #[serde(rename = "Fatalities_air")]
    pub fatalities: Option<f64>,
}

/// One normalized incident. Every retained record has a valid calendar date,
/// finite coordinates, and a non-negative fatality count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrashRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    pub operator: Option<String>,
    pub aircraft: String,
    pub location: String,
    pub country: Option<String>,
    pub fatalities: u32,
}

/// Treat blank and whitespace-only strings as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Require a finite float that is a whole number, e.g. `2001.0`.
fn as_whole_number(value: Option<f64>) -> Option<i64> {
    let v = value.filter(|v| v.is_finite() && v.fract() == 0.0)?;
    Some(v as i64)
}

impl CrashRecord {
    /// Normalize one raw row. Returns `None` when the row is unusable:
    /// unrecognized month name, missing or non-integral year/day, missing
    /// coordinates, missing or negative fatalities, or a year/month/day
    /// combination that is not a real calendar date.
    pub fn from_raw(raw: RawCrashRow) -> Option<Self> {
        let year = as_whole_number(raw.year)? as i32;
        let month = month_from_name(raw.month.as_deref()?)?;
        let day = u32::try_from(as_whole_number(raw.day)?).ok()?;

        let latitude = raw.latitude.filter(|v| v.is_finite())?;
        let longitude = raw.longitude.filter(|v| v.is_finite())?;

        let fatalities_raw = raw.fatalities.filter(|v| v.is_finite())?;
        if fatalities_raw < 0.0 {
            return None;
        }
        let fatalities = fatalities_raw as u32;

        // Day 31 of a 30-day month, Feb 30, and friends all fail here.
        let date = NaiveDate::from_ymd_opt(year, month, day)?;

        Some(Self {
            year,
            month,
            day,
            date,
            latitude,
            longitude,
            operator: non_blank(raw.operator),
            aircraft: non_blank(raw.aircraft).unwrap_or_default(),
            location: non_blank(raw.location).unwrap_or_default(),
            country: non_blank(raw.country),
            fatalities,
        })
    }
}

/// Normalize a batch of raw rows, preserving input order. Unusable rows are
/// dropped and counted in the trace output, never propagated as failures.
pub fn normalize_rows(rows: Vec<RawCrashRow>) -> Vec<CrashRecord> {
    let total = rows.len();
    let records: Vec<CrashRecord> = rows.into_iter().filter_map(CrashRecord::from_raw).collect();
    let dropped = total - records.len();
    if dropped > 0 {
        tracing::debug!(total, dropped, "dropped unusable rows during normalization");
    }
    records
}
