//! Most-recent-crashes selection for the incidents table.

use crate::api::RecentCrash;
use crate::models::CrashRecord;

/// The table shows at most this many rows.
pub const RECENT_LIMIT: usize = 20;

/// Sort the filtered set descending by date, take the first
/// [`RECENT_LIMIT`], and project to table rows.
///
/// The sort is stable, so records sharing a date keep their snapshot order
/// and a fixed input always yields the same output.
pub fn compute_recent_crashes(filtered: &[&CrashRecord]) -> Vec<RecentCrash> {
    let mut sorted: Vec<&CrashRecord> = filtered.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    sorted
        .into_iter()
        .take(RECENT_LIMIT)
        .map(|r| RecentCrash {
            date: r.date,
            operator: r.operator.clone(),
            aircraft: r.aircraft.clone(),
            location: r.location.clone(),
            fatalities: r.fatalities,
        })
        .collect()
}
