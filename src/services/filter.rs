//! Filter evaluation over the snapshot.

use crate::api::FilterParams;
use crate::models::{CrashRecord, Snapshot};

/// Select the records matching `params`, preserving snapshot order.
///
/// The predicate per record is
/// `year ∈ [year_min, year_max] AND fatalities ∈ [fatalities_min,
/// fatalities_max] AND (operator set empty OR operator ∈ set)`, every range
/// inclusive on both ends. Absent bounds are unconstrained, so
/// [`FilterParams::unfiltered`] selects the whole snapshot. Single pass,
/// no side effects.
pub fn apply_filters<'a>(snapshot: &'a Snapshot, params: &FilterParams) -> Vec<&'a CrashRecord> {
    snapshot
        .records()
        .iter()
        .filter(|r| matches(r, params))
        .collect()
}

fn matches(record: &CrashRecord, params: &FilterParams) -> bool {
    if params.year_min.is_some_and(|min| record.year < min) {
        return false;
    }
    if params.year_max.is_some_and(|max| record.year > max) {
        return false;
    }
    if params
        .fatalities_min
        .is_some_and(|min| record.fatalities < min)
    {
        return false;
    }
    if params
        .fatalities_max
        .is_some_and(|max| record.fatalities > max)
    {
        return false;
    }
    if !params.operators.is_empty() {
        match &record.operator {
            Some(op) => params.operators.contains(op),
            // A record with no operator never matches an operator filter.
            None => false,
        }
    } else {
        true
    }
}
