//! Unit tests for player list parsing and the roster

use rablog::combatlog::players::{parse_players, player_names};
use rablog::{PlayerRef, Roster};

use crate::helpers::parse_fixture;

#[test]
fn structured_and_plain_readings_differ_on_malformed_entries() {
    let list = "Alice [Priest; G1], Nobody, Bob [Warrior]";
    assert_eq!(parse_players(list), vec![PlayerRef::new("Alice", "Priest", 1)]);
    assert_eq!(player_names(list), vec!["Alice", "Nobody", "Bob"]);
}

#[test]
fn roster_from_basic_fixture() {
    let roster = parse_fixture("basic.txt").roster();
    assert_eq!(roster.len(), 4);
    assert_eq!(roster.class_of("Dave"), Some("Rogue"));

    let names: Vec<&str> = roster.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol", "Dave"]);
}

#[test]
fn roster_ignores_entries_without_class() {
    let roster = parse_fixture("malformed.txt").roster();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.class_of("Alice"), Some("Priest"));
    assert_eq!(roster.class_of("Bob"), None);
}

#[test]
fn roster_keeps_first_class_across_pulls() {
    let log = rablog::CombatLog::parse_str(
        "11/13 20:15:30.123  RABLOG_PULL: d&r&s&1&P&C&R&S&raid/20\n\
         RABLOG_BAR: 1&fort&Fortitude&1&1&100&0\n\
         RABLOG_PLAYERS_WITH: fort&Shifty [Druid; G1]\n\
         11/13 20:16:30.123  RABLOG_PULL: d&r&s&2&P&C&R&S&raid/20\n\
         RABLOG_BAR: 1&fort&Fortitude&1&1&100&0\n\
         RABLOG_PLAYERS_WITH: fort&Shifty [Shaman; G1]\n",
    );
    let roster = Roster::from_pulls(&log.pulls);
    assert_eq!(roster.class_of("Shifty"), Some("Druid"));
}

#[test]
fn roster_keeps_first_class_across_bars_of_one_pull() {
    let log = rablog::CombatLog::parse_str(
        "11/13 20:15:30.123  RABLOG_PULL: d&r&s&1&P&C&R&S&raid/20\n\
         RABLOG_BAR: 1&a&Fortitude&1&2&50&0\n\
         RABLOG_BAR: 2&b&Intellect&0&1&0&0\n\
         RABLOG_PLAYERS_WITH: a&Bob [Warrior; G1]\n\
         RABLOG_PLAYERS_WITHOUT: b&Bob [Mage; G2]\n",
    );
    assert_eq!(log.pulls[0].bars.len(), 2);
    assert_eq!(log.roster().class_of("Bob"), Some("Warrior"));
}

#[test]
fn roster_reads_with_list_before_without_list() {
    let log = rablog::CombatLog::parse_str(
        "11/13 20:15:30.123  RABLOG_PULL: d&r&s&1&P&C&R&S&raid/20\n\
         RABLOG_BAR: 1&a&Fortitude&1&2&50&0\n\
         RABLOG_PLAYERS_WITHOUT: a&Bob [Mage; G2]\n\
         RABLOG_PLAYERS_WITH: a&Bob [Warrior; G1]\n",
    );
    assert_eq!(log.roster().class_of("Bob"), Some("Warrior"));
}
