//! Request/response types for the REST API.
//!
//! The result entities already derive `Serialize` in [`crate::api`], so this
//! module only adds the query-string form of the filter parameters and the
//! handful of endpoint-specific envelopes.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    CountryBucket, DashboardData, DatasetMeta, FilterParams, KpiSummary, MapPoint, RecentCrash,
    YearlyBucket,
};

/// Filter parameters as they arrive on the query string.
///
/// Operators come as one comma-separated parameter
/// (`?operators=KLM,Aeroflot`) because the frontend joins the multi-select
/// values before issuing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub year_min: Option<i32>,
    #[serde(default)]
    pub year_max: Option<i32>,
    #[serde(default)]
    pub fatalities_min: Option<u32>,
    #[serde(default)]
    pub fatalities_max: Option<u32>,
    #[serde(default)]
    pub operators: Option<String>,
}

impl From<FilterQuery> for FilterParams {
    fn from(query: FilterQuery) -> Self {
        let operators = query
            .operators
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        FilterParams {
            year_min: query.year_min,
            year_max: query.year_max,
            fatalities_min: query.fatalities_min,
            fatalities_max: query.fatalities_max,
            operators,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of records in the live snapshot
    pub records: usize,
}

/// Response for a snapshot reload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    /// Number of records in the rebuilt snapshot
    pub records: usize,
    /// Checksum of the rebuilt snapshot's source
    pub checksum: String,
}
