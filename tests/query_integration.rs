//! End-to-end tests for the query layer: loader → snapshot → filter →
//! aggregators, exercised the way the HTTP handlers use them.

use aircrash_rust::api::{CountryBucket, FilterParams, YearlyBucket};
use aircrash_rust::loader;
use aircrash_rust::models::Snapshot;
use aircrash_rust::services::{apply_filters, map_points, run_query, RECENT_LIMIT};

fn fixture_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/support/sample_crashes.csv")
}

fn fixture_snapshot() -> Snapshot {
    loader::load_snapshot(fixture_path()).expect("fixture should load")
}

/// Three records, years 1999/2000/2001, fatalities 10/20/30, countries
/// A/B/A: the worked example used throughout the dashboard's acceptance
/// checks.
fn worked_example_snapshot() -> Snapshot {
    let csv = "\
Year,Month,Day,Latitude,Longitude,Operator,Aircraft,Location,Country/Region,Fatalities_air
1999,January,1,1.0,1.0,Op1,AC1,Loc1,A,10
2000,January,1,1.0,1.0,Op2,AC2,Loc2,B,20
2001,January,1,1.0,1.0,Op3,AC3,Loc3,A,30
";
    loader::snapshot_from_csv_str(csv).unwrap()
}

#[test]
fn test_fixture_drops_exactly_the_bad_rows() {
    let snapshot = fixture_snapshot();
    // 17 data rows, of which 5 are defective (unknown month, impossible
    // date, missing latitude, negative fatalities, missing fatalities).
    assert_eq!(snapshot.len(), 12);
}

#[test]
fn test_fixture_meta_bounds() {
    let snapshot = fixture_snapshot();
    let meta = snapshot.meta();
    assert_eq!(meta.record_count, 12);
    assert_eq!((meta.year_min, meta.year_max), (1977, 2023));
    assert_eq!((meta.fatalities_min, meta.fatalities_max), (0, 583));
    // 10 distinct named operators; the Cessna row has none.
    assert_eq!(meta.operators.len(), 10);
    assert!(meta.operators.contains(&"KLM".to_string()));
    assert!(meta.operators.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_worked_example_views() {
    let snapshot = worked_example_snapshot();
    let params = FilterParams {
        year_min: Some(2000),
        year_max: Some(2001),
        fatalities_min: Some(0),
        fatalities_max: Some(100),
        ..Default::default()
    };
    let data = run_query(&snapshot, &params);

    assert_eq!(data.kpis.count, 2);
    assert_eq!(data.kpis.total_fatalities, 50);
    assert_eq!(data.kpis.avg_fatalities, 25.0);
    assert_eq!(data.kpis.max_fatalities, 30);

    assert_eq!(
        data.yearly,
        vec![
            YearlyBucket {
                year: 2000,
                total_crashes: 1,
                total_fatalities: 20
            },
            YearlyBucket {
                year: 2001,
                total_crashes: 1,
                total_fatalities: 30
            },
        ]
    );

    // Order-insensitive to consumers; the implementation sorts by name.
    assert_eq!(
        data.countries,
        vec![
            CountryBucket {
                country: "A".to_string(),
                total_crashes: 1,
                total_fatalities: 30
            },
            CountryBucket {
                country: "B".to_string(),
                total_crashes: 1,
                total_fatalities: 20
            },
        ]
    );

    assert_eq!(data.recent.len(), 2);
    assert_eq!(data.recent[0].date.to_string(), "2001-01-01");
    assert_eq!(data.recent[1].date.to_string(), "2000-01-01");
}

#[test]
fn test_boundary_zero_fatalities_range_yields_empty_defaults() {
    let snapshot = worked_example_snapshot();
    let params = FilterParams {
        fatalities_min: Some(0),
        fatalities_max: Some(0),
        ..Default::default()
    };
    let data = run_query(&snapshot, &params);

    assert_eq!(data.kpis.count, 0);
    assert_eq!(data.kpis.total_fatalities, 0);
    assert_eq!(data.kpis.avg_fatalities, 0.0);
    assert_eq!(data.kpis.max_fatalities, 0);
    assert!(data.yearly.is_empty());
    assert!(data.countries.is_empty());
    assert!(data.recent.is_empty());
}

#[test]
fn test_cross_view_identities_hold_on_fixture() {
    let snapshot = fixture_snapshot();
    let cases = vec![
        FilterParams::unfiltered(),
        FilterParams {
            year_min: Some(2000),
            ..Default::default()
        },
        FilterParams {
            fatalities_min: Some(100),
            fatalities_max: Some(600),
            ..Default::default()
        },
        FilterParams {
            operators: ["Air France".to_string()].into_iter().collect(),
            ..Default::default()
        },
    ];

    for params in cases {
        let filtered = apply_filters(&snapshot, &params);
        let data = run_query(&snapshot, &params);

        assert!(filtered.len() <= snapshot.len());
        assert_eq!(data.kpis.count, filtered.len());

        let expected_total: u64 = filtered.iter().map(|r| u64::from(r.fatalities)).sum();
        assert_eq!(data.kpis.total_fatalities, expected_total);

        let yearly_sum: usize = data.yearly.iter().map(|b| b.total_crashes).sum();
        assert_eq!(yearly_sum, data.kpis.count);

        let country_sum: usize = data.countries.iter().map(|b| b.total_crashes).sum();
        assert!(country_sum <= data.kpis.count);
        let known_country = filtered.iter().filter(|r| r.country.is_some()).count();
        assert_eq!(country_sum, known_country);

        assert!(data.recent.len() <= RECENT_LIMIT);
        assert!(data
            .recent
            .windows(2)
            .all(|w| w[0].date >= w[1].date));
    }
}

#[test]
fn test_country_sum_equals_count_iff_all_countries_known() {
    let snapshot = fixture_snapshot();
    // The 2009 Atlantic Ocean record has no country.
    let with_unknown = run_query(&snapshot, &FilterParams::unfiltered());
    let country_sum: usize = with_unknown.countries.iter().map(|b| b.total_crashes).sum();
    assert_eq!(country_sum, with_unknown.kpis.count - 1);

    // Excluding 2009 leaves only known-country records.
    let params = FilterParams {
        year_min: Some(2010),
        ..Default::default()
    };
    let all_known = run_query(&snapshot, &params);
    let country_sum: usize = all_known.countries.iter().map(|b| b.total_crashes).sum();
    assert_eq!(country_sum, all_known.kpis.count);
}

#[test]
fn test_operator_filter_end_to_end() {
    let snapshot = fixture_snapshot();
    let params = FilterParams {
        operators: ["Air France".to_string()].into_iter().collect(),
        ..Default::default()
    };
    let data = run_query(&snapshot, &params);
    assert_eq!(data.kpis.count, 2);
    assert_eq!(data.kpis.total_fatalities, 109 + 228);
}

#[test]
fn test_query_is_bit_identical_across_calls() {
    let snapshot = fixture_snapshot();
    let params = FilterParams {
        year_min: Some(1977),
        year_max: Some(2023),
        fatalities_min: Some(0),
        fatalities_max: Some(600),
        ..Default::default()
    };

    let first = run_query(&snapshot, &params);
    let second = run_query(&snapshot, &params);
    assert_eq!(first, second);

    let a = serde_json::to_string(&first).unwrap();
    let b = serde_json::to_string(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_map_points_match_filter() {
    let snapshot = fixture_snapshot();
    let params = FilterParams {
        year_min: Some(2014),
        ..Default::default()
    };
    let points = map_points(&snapshot, &params);
    let filtered = apply_filters(&snapshot, &params);
    assert_eq!(points.len(), filtered.len());
    let cutoff = chrono::NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
    assert!(points.iter().all(|p| p.date >= cutoff));
}

#[test]
fn test_recent_ties_are_deterministic() {
    let snapshot = fixture_snapshot();
    // Both Tenerife rows and both Pokhara rows share a date.
    let data = run_query(&snapshot, &FilterParams::unfiltered());
    let again = run_query(&snapshot, &FilterParams::unfiltered());
    assert_eq!(data.recent, again.recent);
    // Snapshot order breaks the Pokhara tie: Yeti Airlines row comes first.
    assert_eq!(data.recent[0].operator.as_deref(), Some("Yeti Airlines"));
    assert_eq!(data.recent[1].operator, None);
}
