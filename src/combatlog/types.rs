//! Type definitions for RABuffs Logger records.
//!
//! A RABuffs buff check is written to `WoWCombatLog.txt` as a small group of
//! tagged lines: one pull header, one line per tracked buff ("bar"), optional
//! player-list lines per bar, and a closing marker.
//!
//! # Example
//!
//! ```text
//! 11/13 20:15:30.123  RABLOG_PULL: 11/13&20:15:30&20:15:31&5&MyProfile&Thrall&Durotan&Thrall&raid/20&Boss1
//! 11/13 20:15:30.125  RABLOG_BAR: 1&fort&Fortitude&18&20&90&2&1-8&PRIEST
//! 11/13 20:15:30.126  RABLOG_PLAYERS_WITH: fort&Alice [Priest; G1], Bob [Warrior; G2]
//! 11/13 20:15:30.127  RABLOG_END: 5
//! ```

use serde::{Deserialize, Serialize};

/// Group type used when the `type/size` field has an empty type.
pub const UNKNOWN_GROUP_TYPE: &str = "UNKNOWN";

/// Target used when the pull header carries no target field.
pub const NO_TARGET: &str = "None";

// ============================================================================
// Pull records
// ============================================================================

/// One buff check ("pull") reconstructed from the combat log.
///
/// Serialized with the camelCase keys the JSON export has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRecord {
    /// Combat log timestamp preceding the pull tag (`MM/DD HH:MM:SS.mmm`).
    pub log_timestamp: String,

    /// In-game date/time reported by the addon.
    pub date_time: String,

    /// Real-world clock time.
    pub real_time: String,

    /// Server clock time.
    pub server_time: String,

    /// Pull counter. Expected to increase, never checked.
    pub pull_number: u64,

    /// RABuffs profile that produced the check.
    pub profile_name: String,

    /// Logging character.
    pub character: String,

    /// Realm of the logging character.
    pub realm: String,

    /// Player who triggered the check.
    pub source_player: String,

    /// `raid`, `party`, `solo`, or [`UNKNOWN_GROUP_TYPE`].
    pub group_type: String,

    /// Number of group members, 0 when not reported.
    pub group_size: u64,

    /// Current target, or [`NO_TARGET`].
    pub target: String,

    /// Tracked buffs in the order they were logged.
    pub bars: Vec<BarEntry>,
}

impl PullRecord {
    /// Whether the header carried a target field.
    pub fn has_target(&self) -> bool {
        self.target != NO_TARGET
    }

    /// First bar with the given buff key.
    pub fn bar(&self, buff_key: &str) -> Option<&BarEntry> {
        self.bars.iter().find(|b| b.buff_key == buff_key)
    }

    pub(crate) fn bar_mut(&mut self, buff_key: &str) -> Option<&mut BarEntry> {
        self.bars.iter_mut().find(|b| b.buff_key == buff_key)
    }
}

// ============================================================================
// Bars
// ============================================================================

/// Coverage snapshot of one tracked buff inside a pull.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarEntry {
    /// Display position within the profile.
    pub index: u64,

    /// Stable buff identity used by player-list lines.
    pub buff_key: String,

    /// Human readable buff name.
    pub label: String,

    /// Members that have the buff.
    pub buffed: u64,

    /// Members checked.
    pub total: u64,

    /// Coverage as logged by the addon (not recomputed).
    pub percentage: u64,

    /// Members whose buff is about to expire.
    pub fading: u64,

    /// Raw group filter tag (e.g. `1-8`).
    pub groups: String,

    /// Raw class filter tag.
    pub classes: String,

    /// Raw `Name [Class; G#]` list of members with the buff.
    pub players_with_buff: String,

    /// Raw `Name [Class; G#]` list of members without the buff.
    pub players_without_buff: String,
}

impl BarEntry {
    /// Whether either player list has been filled in.
    pub fn has_player_lists(&self) -> bool {
        !self.players_with_buff.is_empty() || !self.players_without_buff.is_empty()
    }
}

// ============================================================================
// Player references
// ============================================================================

/// A `Name [Class; G#]` entry from a player list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRef {
    pub name: String,
    pub class: String,
    pub group: u64,
}

impl PlayerRef {
    pub fn new(name: impl Into<String>, class: impl Into<String>, group: u64) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            group,
        }
    }
}
