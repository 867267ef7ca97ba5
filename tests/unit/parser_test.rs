//! Unit tests for combat log parsing

use rablog::combatlog::{LogLine, PullAssembler, NO_TARGET, UNKNOWN_GROUP_TYPE};
use rablog::CombatLog;

use crate::helpers::parse_fixture;

#[test]
fn basic_fixture_rebuilds_all_pulls() {
    let log = parse_fixture("basic.txt");
    let numbers: Vec<u64> = log.pulls.iter().map(|p| p.pull_number).collect();
    assert_eq!(numbers, vec![5, 6, 7]);

    let first = &log.pulls[0];
    assert_eq!(first.log_timestamp, "11/13 20:15:30.123");
    assert_eq!(first.date_time, "11/13/24 20:15:30");
    assert_eq!(first.profile_name, "Raid Buffs");
    assert_eq!(first.target, "Ragnaros");
    assert_eq!(first.bars.len(), 2);
    assert_eq!(first.bars[0].groups, "1-8");
    assert_eq!(first.bars[0].classes, "ALL");
    assert_eq!(first.bars[0].players_without_buff, "Carol [Mage; G3]");

    assert_eq!(log.pulls[1].target, NO_TARGET);
    assert_eq!(log.pulls[1].source_player, "Alice");
    assert_eq!(log.pulls[2].group_type, "party");
    assert_eq!(log.pulls[2].group_size, 5);
}

#[test]
fn basic_fixture_ignores_regular_combat_events() {
    let log = parse_fixture("basic.txt");
    assert_eq!(log.summary.total_lines, 18);
    assert_eq!(log.summary.recognized_lines, 16);
    assert_eq!(log.summary.skipped_lines, 0);
}

#[test]
fn clear_fixture_keeps_only_fresh_history() {
    let log = parse_fixture("with_clear.txt");
    assert_eq!(log.pulls.len(), 1);
    assert_eq!(log.pulls[0].profile_name, "Fresh");
    assert_eq!(log.summary.clear_markers, 1);
    assert_eq!(log.summary.discarded_pulls, 2);
    assert!(log.roster().class_of("Ghost").is_none());
}

#[test]
fn malformed_fixture_skips_bad_lines_and_keeps_good_ones() {
    let log = parse_fixture("malformed.txt");
    assert_eq!(log.pulls.len(), 1);

    let pull = &log.pulls[0];
    assert_eq!(pull.pull_number, 5);
    assert_eq!(pull.bars.len(), 1);
    assert_eq!(pull.bars[0].buff_key, "ai");
    assert_eq!(
        pull.bars[0].players_with_buff,
        "Alice [Priest; G1], Nobody, Bob [Warrior]"
    );

    let summary = &log.summary;
    assert_eq!(summary.total_lines, 12);
    assert_eq!(summary.recognized_lines, 11);
    assert_eq!(summary.skipped_lines, 4);
    assert_eq!(summary.orphaned_lines, 2);
    assert_eq!(summary.unmatched_player_lines, 1);
}

#[test]
fn empty_input_gives_empty_log() {
    let log = CombatLog::parse_str("");
    assert!(log.is_empty());
    assert_eq!(log.summary.total_lines, 0);
}

#[test]
fn header_with_ten_fields_sets_target() {
    let log = CombatLog::parse_str(
        "11/13 20:15:30.123  RABLOG_PULL: 11/13&20:15:30&20:15:31&5&MyProfile&Thrall&Durotan&Thrall&raid/20&Boss1\n\
         11/13 20:15:30.125  RABLOG_BAR: 1&fort&Fortitude&18&20&90&2\n\
         11/13 20:15:30.126  RABLOG_PLAYERS_WITH: fort&Alice [Priest; G1], Bob [Warrior; G2]\n\
         11/13 20:15:30.127  RABLOG_END: 5\n",
    );
    let pull = &log.pulls[0];
    assert_eq!(pull.target, "Boss1");
    assert_eq!(pull.bars[0].percentage, 90);
    assert_eq!(pull.bars[0].fading, 2);
    assert_eq!(pull.bars[0].players_with_buff, "Alice [Priest; G1], Bob [Warrior; G2]");
    assert_eq!(pull.bars[0].players_without_buff, "");
}

#[test]
fn empty_group_type_becomes_unknown() {
    let log = CombatLog::parse_str(
        "11/13 20:15:30.123  RABLOG_PULL: d&r&s&1&P&C&R&S&/7\n",
    );
    assert_eq!(log.pulls[0].group_type, UNKNOWN_GROUP_TYPE);
    assert_eq!(log.pulls[0].group_size, 7);
}

#[test]
fn assembler_can_be_driven_line_by_line() {
    let mut assembler = PullAssembler::new();
    assert!(!assembler.is_open());

    assembler.feed("11/13 20:15:30.123  RABLOG_PULL: d&r&s&1&P&C&R&S&raid/20");
    assert_eq!(assembler.open_record().map(|p| p.pull_number), Some(1));

    assembler.feed("RABLOG_END: 1");
    assert!(!assembler.is_open());
    assert_eq!(assembler.working().len(), 1);

    assert_eq!(assembler.finish().pulls.len(), 1);
}

#[test]
fn classify_is_exposed_for_callers() {
    assert_eq!(LogLine::classify("RABLOG_CLEAR:"), LogLine::Clear);
    assert!(!LogLine::classify("nothing here").is_recognized());
}
