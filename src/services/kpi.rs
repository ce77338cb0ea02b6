//! KPI banner figures.

use crate::api::KpiSummary;
use crate::models::CrashRecord;

/// Compute the KPI summary over the filtered set.
///
/// The empty set produces all-zero figures; there is no division by zero.
/// The average is rounded to one decimal, matching what the banner shows.
pub fn compute_kpi_summary(filtered: &[&CrashRecord]) -> KpiSummary {
    let count = filtered.len();
    if count == 0 {
        return KpiSummary::empty();
    }

    let total_fatalities: u64 = filtered.iter().map(|r| u64::from(r.fatalities)).sum();
    let max_fatalities = filtered.iter().map(|r| r.fatalities).max().unwrap_or(0);
    let avg_fatalities = round_one_decimal(total_fatalities as f64 / count as f64);

    KpiSummary {
        count,
        total_fatalities,
        avg_fatalities,
        max_fatalities,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
