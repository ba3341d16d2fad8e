// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use value_distribution::*;

fn sorted_profile(
    config: DistributionConfig,
    columns: &[&str],
) -> ValueDistributionProfile<SortedFrequencyTable> {
    ValueDistributionProfile::with_tables(
        config,
        columns
            .iter()
            .map(|name| (name.to_string(), SortedFrequencyTable::new())),
    )
}

fn ranked_cells(
    profile: &ValueDistributionProfile<SortedFrequencyTable>,
    column: &str,
) -> Vec<String> {
    profile
        .result_for(column)
        .unwrap()
        .as_ranked()
        .unwrap()
        .cells()
}

fn full_cells<T: FrequencyTable>(
    profile: &ValueDistributionProfile<T>,
    column: &str,
) -> Vec<String> {
    profile
        .result_for(column)
        .unwrap()
        .as_full()
        .unwrap()
        .rows
        .iter()
        .map(|row| row.to_string())
        .collect()
}

#[test]
fn test_top_bottom_profile() {
    let mut profile = sorted_profile(DistributionConfig::bounded(4, 3), &["col1", "col2"]);

    profile.process_row(&[Some("foo"), Some("bar")], 40).unwrap();
    assert_eq!(ranked_cells(&profile, "col1"), vec!["foo (40)", "", "", "", "", "", ""]);

    profile.process_row(&[Some("n"), Some("s")], 2).unwrap();
    assert_eq!(
        ranked_cells(&profile, "col2"),
        vec!["bar (40)", "s (2)", "", "", "", "", ""]
    );

    profile.process_row(&[Some("m"), Some("t")], 1).unwrap();
    assert_eq!(
        ranked_cells(&profile, "col1"),
        vec!["foo (40)", "n (2)", "", "", "", "", "<Unique values> (1)"]
    );

    let rows: [([Option<&str>; 2], u64); 11] = [
        ([Some("foobar"), Some("")], 10),
        ([Some("foobar"), Some("bar")], 9),
        ([Some("abc"), Some("123")], 8),
        ([Some("!"), Some("-")], 7),
        ([Some("def"), Some("456")], 6),
        ([Some("ghi"), Some("789")], 5),
        ([Some("jkl"), Some("000")], 4),
        ([Some("m"), Some("r")], 3),
        ([None, None], 2),
        ([Some("o"), Some("u")], 1),
        ([Some("o"), Some("v")], 1),
    ];
    for (values, count) in rows {
        profile.process_row(&values, count).unwrap();
    }

    assert_eq!(
        ranked_cells(&profile, "col1"),
        vec!["foo (40)", "foobar (19)", "abc (8)", "! (7)", "<null> (2)", "n (2)", "o (2)"]
    );
    assert_eq!(
        ranked_cells(&profile, "col2"),
        vec!["bar (49)", " (10)", "123 (8)", "- (7)", "<null> (2)", "s (2)", "<Unique values> (3)"]
    );

    let ranked = profile.result_for("col2").unwrap();
    let ranked = ranked.as_ranked().unwrap();
    let labels: Vec<String> = ranked.labeled_rows().map(|(label, _)| label).collect();
    assert_eq!(
        labels,
        vec!["top 1", "top 2", "top 3", "top 4", "bottom 3", "bottom 2", "bottom 1"]
    );

    let results = profile.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].column, "col1");
    assert_eq!(results[1].column, "col2");
}

#[test]
fn test_profile_without_top_bottom() {
    let mut profile = ValueDistributionProfile::new(DistributionConfig::full(), &["foo", "bar"]);

    profile.process_row(&[Some("kasper"), Some("26")], 1).unwrap();
    assert_eq!(full_cells(&profile, "foo"), vec!["<Unique values> (1) 100%"]);

    profile.process_row(&[Some("kasper"), Some("25")], 1).unwrap();
    assert_eq!(full_cells(&profile, "foo"), vec!["kasper (2) 100%"]);
    assert_eq!(full_cells(&profile, "bar"), vec!["<Unique values> (2) 100%"]);

    profile.process_row(&[Some("kasper"), Some("25")], 1).unwrap();
    assert_eq!(full_cells(&profile, "foo"), vec!["kasper (3) 100%"]);
    assert_eq!(full_cells(&profile, "bar"), vec!["25 (2) 66%", "<Unique values> (1) 33%"]);

    let bar = profile.result_for("bar").unwrap();
    assert_eq!(bar.as_full().unwrap().total_count, 3);
}

#[test]
fn test_null_values_full_result() {
    let mut profile = ValueDistributionProfile::new(DistributionConfig::full(), &["foo"]);

    profile.process_row(&[None], 1).unwrap();
    assert_eq!(full_cells(&profile, "foo"), vec!["<Unique values> (1) 100%"]);

    profile.process_row(&[Some("foo")], 1).unwrap();
    assert_eq!(full_cells(&profile, "foo"), vec!["<Unique values> (2) 100%"]);

    profile.process_row(&[None], 1).unwrap();
    assert_eq!(full_cells(&profile, "foo"), vec!["<null> (2) 66%", "<Unique values> (1) 33%"]);
}

#[test]
fn test_row_width_mismatch_is_rejected() {
    let mut profile = ValueDistributionProfile::new(DistributionConfig::full(), &["a", "b"]);
    let err = profile.process_row(&[Some("x")], 1).unwrap_err();
    assert!(matches!(err, DistributionError::InvalidInput(_)));
    let column = profile.column("a").unwrap();
    assert!(column.table().is_empty());
    assert_eq!(column.null_count(), 0);
}

#[test]
fn test_unknown_column() {
    let mut profile = ValueDistributionProfile::new(DistributionConfig::full(), &["a"]);
    assert_eq!(
        profile.process_value("zzz", Some("x"), 1).unwrap_err(),
        DistributionError::UnknownColumn("zzz".into())
    );
    assert!(profile.result_for("zzz").is_err());
}

#[test]
fn test_failed_column_is_isolated() {
    let mut broken = MemoryFrequencyTable::new();
    broken.close().unwrap();

    let mut profile = ValueDistributionProfile::with_tables(
        DistributionConfig::bounded(2, 2),
        vec![
            ("healthy".to_string(), MemoryFrequencyTable::new()),
            ("broken".to_string(), broken),
        ],
    );
    profile.process_value("healthy", Some("x"), 3).unwrap();
    profile.process_value("broken", None, 2).unwrap();

    let mut sink = MemorySink::new();
    profile.emit(&mut sink).unwrap();

    assert_eq!(sink.accepted.len(), 1);
    assert_eq!(sink.rejected.len(), 1);
    let healthy = sink.distribution("healthy").unwrap().as_ranked().unwrap();
    assert_eq!(healthy.cells(), vec!["x (3)", "", "", ""]);
    assert!(matches!(sink.error("broken"), Some(DistributionError::FrequencyTable(_))));
}

#[test]
fn test_many_columns_in_parallel() {
    let names: Vec<String> = (0..16).map(|i| format!("col{}", i)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut profile = ValueDistributionProfile::new(DistributionConfig::bounded(3, 3), &refs);

    for i in 0..16u64 {
        for value in 0..20u64 {
            profile
                .process_value(&names[i as usize], Some(value.to_string().as_str()), value + i + 2)
                .unwrap();
        }
    }

    let results = profile.results();
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.column, names[i]);
        let ranked = result.outcome.as_ref().unwrap().as_ranked().unwrap();
        let top: Vec<u64> = ranked.top_rows().iter().filter_map(DisplayRow::count).collect();
        let i = i as u64;
        assert_eq!(top, vec![21 + i, 20 + i, 19 + i]);
        let bottom: Vec<u64> = ranked.bottom_rows().iter().filter_map(DisplayRow::count).collect();
        assert_eq!(bottom, vec![4 + i, 3 + i, 2 + i]);
    }
}

#[test]
fn test_close_releases_tables() {
    let mut profile = ValueDistributionProfile::new(DistributionConfig::full(), &["a", "b"]);
    profile.process_row(&[Some("x"), Some("y")], 2).unwrap();
    profile.close().unwrap();

    assert!(profile.columns().iter().all(|c| c.table().is_empty()));
    assert!(profile.process_row(&[Some("x"), Some("y")], 1).is_err());
    assert!(profile.results().iter().all(|r| r.outcome.is_err()));
}
