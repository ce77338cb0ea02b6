//! The immutable, normalized snapshot shared by all queries.

use std::collections::BTreeSet;

use crate::api::DatasetMeta;
use crate::models::record::CrashRecord;

/// The read-only record set every query runs against. Built once from the
/// raw source; replacing it is an atomic swap in the store, never an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    records: Vec<CrashRecord>,
    checksum: String,
}

impl Snapshot {
    pub fn new(records: Vec<CrashRecord>, checksum: String) -> Self {
        Self { records, checksum }
    }

    pub fn records(&self) -> &[CrashRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Full year extent of the dataset; `None` when the snapshot is empty.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Full fatalities extent of the dataset; `None` when empty.
    pub fn fatalities_range(&self) -> Option<(u32, u32)> {
        let min = self.records.iter().map(|r| r.fatalities).min()?;
        let max = self.records.iter().map(|r| r.fatalities).max()?;
        Some((min, max))
    }

    /// Distinct operator names, sorted. Drives the operator dropdown.
    pub fn operators(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .records
            .iter()
            .filter_map(|r| r.operator.as_deref())
            .collect();
        names.into_iter().map(str::to_string).collect()
    }

    /// Dataset-wide bounds and catalogue for the frontend controls.
    pub fn meta(&self) -> DatasetMeta {
        let (year_min, year_max) = self.year_range().unwrap_or((0, 0));
        let (fatalities_min, fatalities_max) = self.fatalities_range().unwrap_or((0, 0));
        DatasetMeta {
            record_count: self.records.len(),
            year_min,
            year_max,
            fatalities_min,
            fatalities_max,
            operators: self.operators(),
            checksum: self.checksum.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(year: i32, operator: Option<&str>, fatalities: u32) -> CrashRecord {
        CrashRecord {
            year,
            month: 6,
            day: 15,
            date: NaiveDate::from_ymd_opt(year, 6, 15).unwrap(),
            latitude: 1.0,
            longitude: 2.0,
            operator: operator.map(str::to_string),
            aircraft: "DC-3".to_string(),
            location: "Somewhere".to_string(),
            country: None,
            fatalities,
        }
    }

    #[test]
    fn test_empty_snapshot_ranges() {
        let snapshot = Snapshot::new(vec![], "abc".to_string());
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.year_range(), None);
        assert_eq!(snapshot.fatalities_range(), None);

        let meta = snapshot.meta();
        assert_eq!(meta.record_count, 0);
        assert_eq!(meta.year_min, 0);
        assert_eq!(meta.fatalities_max, 0);
    }

    #[test]
    fn test_ranges_and_operators() {
        let snapshot = Snapshot::new(
            vec![
                record(1950, Some("KLM"), 40),
                record(2010, None, 0),
                record(1999, Some("Aeroflot"), 12),
                record(1999, Some("KLM"), 3),
            ],
            "abc".to_string(),
        );

        assert_eq!(snapshot.year_range(), Some((1950, 2010)));
        assert_eq!(snapshot.fatalities_range(), Some((0, 40)));
        assert_eq!(snapshot.operators(), vec!["Aeroflot", "KLM"]);

        let meta = snapshot.meta();
        assert_eq!(meta.record_count, 4);
        assert_eq!(meta.checksum, "abc");
    }
}
