//! Year-over-year trend aggregation.

use std::collections::BTreeMap;

use crate::api::YearlyBucket;
use crate::models::CrashRecord;

/// Group the filtered set by year, ascending. Per year: crash count and
/// fatality total. Drives the two-series trend chart.
pub fn compute_yearly_trend(filtered: &[&CrashRecord]) -> Vec<YearlyBucket> {
    let mut by_year: BTreeMap<i32, (usize, u64)> = BTreeMap::new();
    for record in filtered {
        let entry = by_year.entry(record.year).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u64::from(record.fatalities);
    }

    by_year
        .into_iter()
        .map(|(year, (total_crashes, total_fatalities))| YearlyBucket {
            year,
            total_crashes,
            total_fatalities,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(year: i32, fatalities: u32) -> CrashRecord {
        CrashRecord {
            year,
            month: 1,
            day: 1,
            date: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            latitude: 0.0,
            longitude: 0.0,
            operator: None,
            aircraft: String::new(),
            location: String::new(),
            country: None,
            fatalities,
        }
    }

    #[test]
    fn test_empty_set_empty_trend() {
        assert!(compute_yearly_trend(&[]).is_empty());
    }

    #[test]
    fn test_groups_and_sorts_ascending() {
        let records = [
            record(2001, 30),
            record(1999, 10),
            record(2001, 5),
            record(2000, 20),
        ];
        let refs: Vec<&CrashRecord> = records.iter().collect();
        let trend = compute_yearly_trend(&refs);

        assert_eq!(
            trend,
            vec![
                YearlyBucket {
                    year: 1999,
                    total_crashes: 1,
                    total_fatalities: 10
                },
                YearlyBucket {
                    year: 2000,
                    total_crashes: 1,
                    total_fatalities: 20
                },
                YearlyBucket {
                    year: 2001,
                    total_crashes: 2,
                    total_fatalities: 35
                },
            ]
        );
    }

    #[test]
    fn test_crash_counts_sum_to_input_size() {
        let records = [record(1990, 1), record(1990, 2), record(1991, 3)];
        let refs: Vec<&CrashRecord> = records.iter().collect();
        let trend = compute_yearly_trend(&refs);
        let total: usize = trend.iter().map(|b| b.total_crashes).sum();
        assert_eq!(total, refs.len());
    }
}
