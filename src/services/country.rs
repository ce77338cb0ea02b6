//! Per-country totals for the choropleth.

use std::collections::BTreeMap;

use crate::api::CountryBucket;
use crate::models::CrashRecord;

/// Group the filtered set by country.
///
/// Only records with a known country contribute; a record without one is
/// skipped here even though the other aggregators still count it. That
/// asymmetry matches the long-standing behavior of the dashboard and is
/// deliberate — do not change it without product sign-off. Output is sorted
/// by country name so identical inputs always produce identical output.
pub fn compute_country_totals(filtered: &[&CrashRecord]) -> Vec<CountryBucket> {
    let mut by_country: BTreeMap<&str, (usize, u64)> = BTreeMap::new();
    for record in filtered {
        let Some(country) = record.country.as_deref() else {
            continue;
        };
        let entry = by_country.entry(country).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u64::from(record.fatalities);
    }

    by_country
        .into_iter()
        .map(|(country, (total_crashes, total_fatalities))| CountryBucket {
            country: country.to_string(),
            total_crashes,
            total_fatalities,
        })
        .collect()
}
