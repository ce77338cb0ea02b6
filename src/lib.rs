//! # Air-Crash Dashboard Backend
//!
//! Query and aggregation engine for the global air-crashes dashboard
//! (1908–2024). The crate turns the cleaned aviation-accident table plus a
//! set of filter parameters into the derived views the frontend renders:
//! a KPI banner, a year-over-year trend, per-country totals, a
//! recent-incidents table, and map markers.
//!
//! ## Architecture
//!
//! - [`models`]: normalized [`models::CrashRecord`]s and the immutable
//!   [`models::Snapshot`] shared by all queries
//! - [`loader`]: CSV ingestion and snapshot construction
//! - [`store`]: the shared snapshot with atomic replacement
//! - [`services`]: filter evaluation and the four pure aggregators
//! - [`api`]: result entities handed to the presentation layer
//! - [`http`]: axum-based REST API (feature `http-server`)
//!
//! The snapshot is built once at startup and never mutated; every query is a
//! pure function of `(snapshot, FilterParams)`, so queries run concurrently
//! without coordination. Rebuilding the snapshot is an atomic swap of the
//! shared reference, never an in-place edit.

pub mod api;
pub mod loader;
pub mod models;
pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
