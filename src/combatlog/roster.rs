//! Player roster collected from the player lists of retained pulls.

use std::collections::BTreeMap;

use super::players::parse_players;
use super::types::PullRecord;

/// Player name to class, keeping the first class seen for each name.
///
/// Late lines in a session are the ones most likely to be garbled, so an
/// established name is never overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    classes: BTreeMap<String, String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan every bar of every pull, with-buff list before without-buff list.
    pub fn from_pulls(pulls: &[PullRecord]) -> Self {
        let mut roster = Self::new();
        for bar in pulls.iter().flat_map(|p| &p.bars) {
            for list in [&bar.players_with_buff, &bar.players_without_buff] {
                for player in parse_players(list) {
                    roster.insert(player.name, player.class);
                }
            }
        }
        roster
    }

    /// Record a player unless the name is already known.
    ///
    /// Returns `true` if the player was added.
    pub fn insert(&mut self, name: impl Into<String>, class: impl Into<String>) -> bool {
        let name = name.into();
        if self.classes.contains_key(&name) {
            return false;
        }
        self.classes.insert(name, class.into());
        true
    }

    pub fn class_of(&self, name: &str) -> Option<&str> {
        self.classes.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// `(name, class)` pairs ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.classes
            .iter()
            .map(|(name, class)| (name.as_str(), class.as_str()))
    }

    /// Player names grouped by class, both sorted ascending.
    pub fn by_class(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (name, class) in self.iter() {
            grouped.entry(class).or_default().push(name);
        }
        grouped
    }
}
