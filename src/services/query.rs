//! Query fan-out: one filter pass feeding all four aggregators.

use crate::api::{DashboardData, FilterParams, MapPoint};
use crate::models::Snapshot;
use crate::services::{
    apply_filters, compute_country_totals, compute_kpi_summary, compute_recent_crashes,
    compute_yearly_trend,
};

/// Run one dashboard query: filter the snapshot once, then compute the KPI
/// summary, yearly trend, country totals, and recent-crashes view from the
/// same filtered subset.
///
/// Pure function of `(snapshot, params)`: no shared mutable state, safe to
/// call from any number of threads against the same snapshot, and identical
/// arguments always produce identical results.
pub fn run_query(snapshot: &Snapshot, params: &FilterParams) -> DashboardData {
    let filtered = apply_filters(snapshot, params);

    DashboardData {
        kpis: compute_kpi_summary(&filtered),
        yearly: compute_yearly_trend(&filtered),
        countries: compute_country_totals(&filtered),
        recent: compute_recent_crashes(&filtered),
    }
}

/// Project the filtered subset into map markers. The scatter map is drawn
/// straight from the filtered records rather than from an aggregate, so it
/// gets its own projection.
pub fn map_points(snapshot: &Snapshot, params: &FilterParams) -> Vec<MapPoint> {
    apply_filters(snapshot, params)
        .into_iter()
        .map(|r| MapPoint {
            date: r.date,
            latitude: r.latitude,
            longitude: r.longitude,
            operator: r.operator.clone(),
            aircraft: r.aircraft.clone(),
            location: r.location.clone(),
            fatalities: r.fatalities,
        })
        .collect()
}
