//! Data Transfer Objects for the dashboard query layer.
//!
//! Every type here is a plain serializable value: queries produce fresh
//! instances on each call and nothing in this module is ever mutated in
//! place. The HTTP layer re-exports these types for its responses.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filter parameters for one dashboard query.
///
/// All ranges are inclusive on both ends. Absent bounds default to the full
/// extent of the snapshot, and an empty operator set means "no operator
/// constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub year_min: Option<i32>,
    #[serde(default)]
    pub year_max: Option<i32>,
    #[serde(default)]
    pub fatalities_min: Option<u32>,
    #[serde(default)]
    pub fatalities_max: Option<u32>,
    /// Operator names to match exactly; empty set = no constraint.
    #[serde(default)]
    pub operators: BTreeSet<String>,
}

impl FilterParams {
    /// Parameters that match every record (all defaults).
    pub fn unfiltered() -> Self {
        Self::default()
    }
}

/// Key figures over the filtered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Number of crashes in the filtered set.
    pub count: usize,
    pub total_fatalities: u64,
    /// Mean fatalities per crash, rounded to one decimal; 0.0 when empty.
    pub avg_fatalities: f64,
    /// Worst single crash; 0 when empty.
    pub max_fatalities: u32,
}

impl KpiSummary {
    /// The well-defined value for an empty filtered set.
    pub fn empty() -> Self {
        Self {
            count: 0,
            total_fatalities: 0,
            avg_fatalities: 0.0,
            max_fatalities: 0,
        }
    }
}

/// One year of the two-series time trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyBucket {
    pub year: i32,
    pub total_crashes: usize,
    pub total_fatalities: u64,
}

/// Per-country totals; only records with a known country contribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryBucket {
    pub country: String,
    pub total_crashes: usize,
    pub total_fatalities: u64,
}

/// One row of the recent-crashes table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentCrash {
    pub date: NaiveDate,
    pub operator: Option<String>,
    pub aircraft: String,
    pub location: String,
    pub fatalities: u32,
}

/// One marker on the crash map, projected from a filtered record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    pub operator: Option<String>,
    pub aircraft: String,
    pub location: String,
    pub fatalities: u32,
}

/// The four derived views handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub kpis: KpiSummary,
    /// Ascending by year.
    pub yearly: Vec<YearlyBucket>,
    /// Lexicographic by country name (order-insensitive to consumers, kept
    /// deterministic here).
    pub countries: Vec<CountryBucket>,
    /// Descending by date, at most 20 entries.
    pub recent: Vec<RecentCrash>,
}

/// Dataset-wide bounds and operator catalogue, used by the frontend to
/// populate sliders and the operator dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMeta {
    pub record_count: usize,
    pub year_min: i32,
    pub year_max: i32,
    pub fatalities_min: u32,
    pub fatalities_max: u32,
    /// Distinct operator names, sorted.
    pub operators: Vec<String>,
    /// SHA-256 of the source file the snapshot was built from.
    pub checksum: String,
}
