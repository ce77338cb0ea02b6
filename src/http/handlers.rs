//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to one endpoint: it resolves the filter
//! parameters from the query string, takes an `Arc` to the current snapshot,
//! and delegates to the service layer. No handler blocks on I/O except
//! `reload_snapshot`, which re-reads the source file off the async runtime.

use axum::extract::{Query, State};
use axum::Json;

use super::dto::{
    DashboardData, DatasetMeta, FilterParams, FilterQuery, HealthResponse, KpiSummary, MapPoint,
    ReloadResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{CountryBucket, RecentCrash, YearlyBucket};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Liveness check; reports the size of the snapshot currently being served.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let snapshot = state.store.snapshot();
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: snapshot.len(),
    }))
}

/// GET /v1/meta
///
/// Dataset bounds and the operator catalogue for the filter controls.
pub async fn get_meta(State(state): State<AppState>) -> HandlerResult<DatasetMeta> {
    Ok(Json(state.store.snapshot().meta()))
}

/// GET /v1/dashboard
///
/// All four derived views for one set of filter parameters.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<DashboardData> {
    let params: FilterParams = query.into();
    let snapshot = state.store.snapshot();
    Ok(Json(services::run_query(&snapshot, &params)))
}

/// GET /v1/kpis
pub async fn get_kpis(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<KpiSummary> {
    let params: FilterParams = query.into();
    let snapshot = state.store.snapshot();
    let filtered = services::apply_filters(&snapshot, &params);
    Ok(Json(services::compute_kpi_summary(&filtered)))
}

/// GET /v1/yearly-trends
pub async fn get_yearly_trends(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<Vec<YearlyBucket>> {
    let params: FilterParams = query.into();
    let snapshot = state.store.snapshot();
    let filtered = services::apply_filters(&snapshot, &params);
    Ok(Json(services::compute_yearly_trend(&filtered)))
}

/// GET /v1/country-totals
pub async fn get_country_totals(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<Vec<CountryBucket>> {
    let params: FilterParams = query.into();
    let snapshot = state.store.snapshot();
    let filtered = services::apply_filters(&snapshot, &params);
    Ok(Json(services::compute_country_totals(&filtered)))
}

/// GET /v1/recent
pub async fn get_recent(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<Vec<RecentCrash>> {
    let params: FilterParams = query.into();
    let snapshot = state.store.snapshot();
    let filtered = services::apply_filters(&snapshot, &params);
    Ok(Json(services::compute_recent_crashes(&filtered)))
}

/// GET /v1/map-points
///
/// The filtered subset projected to map markers.
pub async fn get_map_points(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<Vec<MapPoint>> {
    let params: FilterParams = query.into();
    let snapshot = state.store.snapshot();
    Ok(Json(services::map_points(&snapshot, &params)))
}

/// POST /v1/reload
///
/// Rebuild the snapshot from the source file and swap it in atomically.
/// In-flight queries keep the snapshot they started with; on failure the
/// live snapshot is untouched and a 500 is returned.
pub async fn reload_snapshot(State(state): State<AppState>) -> HandlerResult<ReloadResponse> {
    let store = state.store.clone();
    let rebuilt = tokio::task::spawn_blocking(move || store.reload())
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(ReloadResponse {
        records: rebuilt.len(),
        checksum: rebuilt.checksum().to_string(),
    }))
}
