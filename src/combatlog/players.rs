//! Parser for the player lists embedded in `RABLOG_PLAYERS_*` lines.
//!
//! The addon writes members as `Name [Class; G#]` joined by `", "`:
//!
//! ```text
//! Alice [Priest; G1], Bob [Warrior; G2], Carol [Mage; G2]
//! ```
//!
//! Two readings exist. [`parse_players`] is strict and drops entries that do
//! not carry the bracketed class/group part; the CSV export and the roster
//! rely on it. [`player_names`] is lenient and falls back to the first word
//! of an entry, which is what the text report shows.

use super::types::PlayerRef;

/// Separator between entries of a player list.
pub const ENTRY_SEPARATOR: &str = ", ";

/// Parse every well-formed `Name [Class; G#]` entry of a player list.
///
/// Entries that do not match are skipped. Empty or blank input gives an
/// empty list.
pub fn parse_players(list: &str) -> Vec<PlayerRef> {
    entries(list).filter_map(parse_entry).collect()
}

/// Extract display names from a player list.
///
/// Uses the text before `[` when present, otherwise the first
/// whitespace-delimited word of the entry. Blank entries are dropped.
pub fn player_names(list: &str) -> Vec<String> {
    entries(list)
        .filter_map(|entry| {
            let bracketed = entry
                .char_indices()
                .skip(1)
                .find(|&(_, c)| c == '[')
                .map(|(pos, _)| entry[..pos].trim_end());
            bracketed
                .or_else(|| entry.split_whitespace().next())
                .map(str::to_string)
        })
        .collect()
}

/// Parse a single `Name [Class; G#]` entry.
///
/// The first `[` preceded by a non-empty name and the first `;` that is
/// followed by `G<digits>]` (optionally after whitespace) decide the split.
/// Anything after the closing `]` is ignored.
pub fn parse_entry(entry: &str) -> Option<PlayerRef> {
    let entry = entry.trim();

    for (open, _) in entry.match_indices('[') {
        let name = entry[..open].trim_end();
        if name.is_empty() {
            continue;
        }

        let body = &entry[open + 1..];
        for (semi, _) in body.match_indices(';') {
            let class = &body[..semi];
            if class.is_empty() {
                continue;
            }
            if let Some(group) = group_suffix(&body[semi + 1..]) {
                return Some(PlayerRef::new(name, class, group));
            }
        }
    }

    None
}

fn entries(list: &str) -> impl Iterator<Item = &str> {
    let blank = list.trim().is_empty();
    list.split(ENTRY_SEPARATOR)
        .filter(move |_| !blank)
        .map(str::trim)
}

/// `<ws>G<digits>]` at the start of `s`, returning the group number.
fn group_suffix(s: &str) -> Option<u64> {
    let rest = s.trim_start().strip_prefix('G')?;
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 || !rest[digits_len..].starts_with(']') {
        return None;
    }
    rest[..digits_len].parse().ok()
}
