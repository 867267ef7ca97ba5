//! Unit tests for statistics

use rablog::Statistics;

use crate::helpers::parse_fixture;

#[test]
fn basic_fixture_statistics() {
    let stats = parse_fixture("basic.txt").statistics();
    assert_eq!(stats.total_entries, 3);
    assert_eq!(
        stats.profiles,
        vec![("Raid Buffs".to_string(), 2), ("Five Man".to_string(), 1)]
    );

    let labels: Vec<&str> = stats.coverage.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Fortitude", "Mark of the Wild"]);
    assert_eq!(stats.coverage[1].average, 83.0);

    assert_eq!(stats.first_date_time.as_deref(), Some("11/13/24 20:15:30"));
    assert_eq!(stats.last_date_time.as_deref(), Some("11/13/24 20:40:00"));
}

#[test]
fn summary_block() {
    let summary = parse_fixture("basic.txt").statistics().summary();
    assert!(summary.contains("Pulls by Profile:\n  Raid Buffs: 2\n  Five Man: 1\n"));
    assert!(summary.contains("  Fortitude           :  88.7%\n"));
    assert!(summary.contains("  Mark of the Wild    :  83.0%\n"));
    assert!(summary.contains("Last entry: 11/13/24 20:40:00\n"));
}

#[test]
fn statistics_of_nothing() {
    assert_eq!(Statistics::from_pulls(&[]).summary(), "No logs found\n");
}
