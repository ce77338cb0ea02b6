//! Service layer: the query and aggregation logic behind every view.
//!
//! Each submodule is a pure, single-pass transformation. The filter
//! evaluator selects a subsequence of the snapshot; the four aggregators
//! each consume that filtered set independently; `query` runs the whole
//! fan-out for one set of filter parameters.

pub mod country;
pub mod filter;
pub mod kpi;
pub mod query;
pub mod recent;
pub mod yearly;

pub use country::compute_country_totals;
pub use filter::apply_filters;
pub use kpi::compute_kpi_summary;
pub use query::{map_points, run_query};
pub use recent::{compute_recent_crashes, RECENT_LIMIT};
pub use yearly::compute_yearly_trend;
