//! Pull reconstruction state machine.
//!
//! The assembler is fed lines in file order. It holds at most one open
//! [`PullRecord`]; bar and player-list lines mutate that record, and end,
//! clear, the next pull header, or the end of input close it into the
//! working sequence. After the pass, everything before the last clear marker
//! is dropped.

use tracing::{debug, info, trace};

use super::line::LogLine;
use super::types::{BarEntry, PullRecord, NO_TARGET, UNKNOWN_GROUP_TYPE};
use super::CombatLog;

/// Minimum `&`-separated fields in a pull header.
pub const PULL_MIN_FIELDS: usize = 9;

/// Minimum `&`-separated fields in a bar line.
pub const BAR_MIN_FIELDS: usize = 7;

/// Counters describing one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Lines fed to the assembler.
    pub total_lines: usize,
    /// Lines classified as one of the RABuffs kinds.
    pub recognized_lines: usize,
    /// Tagged lines dropped because their payload was malformed.
    pub skipped_lines: usize,
    /// Bar, player-list, or end lines seen while no pull was open.
    pub orphaned_lines: usize,
    /// Player-list lines whose buff key matched no bar of the open pull.
    pub unmatched_player_lines: usize,
    /// Clear markers seen.
    pub clear_markers: usize,
    /// Working-sequence position recorded by the last clear marker.
    pub clear_index: Option<usize>,
    /// Pulls dropped because they closed before the last clear.
    pub discarded_pulls: usize,
}

/// Which player list of a bar a `RABLOG_PLAYERS_*` line fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayerList {
    With,
    Without,
}

/// Result of applying one recognized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Applied,
    Malformed,
    NoOpenRecord,
    UnmatchedKey,
}

/// Single-pass pull assembler.
#[derive(Debug, Default)]
pub struct PullAssembler {
    working: Vec<PullRecord>,
    open: Option<PullRecord>,
    clear_index: Option<usize>,
    summary: ParseSummary,
}

impl PullAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a pull is currently open.
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// The pull currently being assembled.
    pub fn open_record(&self) -> Option<&PullRecord> {
        self.open.as_ref()
    }

    /// Pulls closed so far, before clear truncation.
    pub fn working(&self) -> &[PullRecord] {
        &self.working
    }

    /// Classify and apply one line.
    pub fn feed(&mut self, line: &str) {
        self.summary.total_lines += 1;

        let kind = LogLine::classify(line);
        let outcome = match kind {
            LogLine::StartPull { timestamp, payload } => self.start_pull(timestamp, payload),
            LogLine::Bar(payload) => self.push_bar(payload),
            LogLine::PlayersWith(payload) => self.assign_players(payload, PlayerList::With),
            LogLine::PlayersWithout(payload) => {
                self.assign_players(payload, PlayerList::Without)
            }
            LogLine::Clear => self.clear(),
            LogLine::End(_) => self.end(),
            LogLine::Unrecognized => return,
        };

        self.summary.recognized_lines += 1;
        let line_number = self.summary.total_lines;
        match outcome {
            Outcome::Applied => trace!(line = line_number, ?kind, "applied"),
            Outcome::Malformed => {
                self.summary.skipped_lines += 1;
                debug!(line = line_number, ?kind, "skipping malformed RABuffs line");
            }
            Outcome::NoOpenRecord => {
                self.summary.orphaned_lines += 1;
                debug!(line = line_number, ?kind, "ignoring line outside of a pull");
            }
            Outcome::UnmatchedKey => {
                self.summary.unmatched_player_lines += 1;
                debug!(line = line_number, ?kind, "player list references unknown buff key");
            }
        }
    }

    /// Close any open pull and apply the clear truncation.
    pub fn finish(mut self) -> CombatLog {
        if let Some(open) = self.open.take() {
            self.working.push(open);
        }

        let mut summary = self.summary;
        let pulls = match self.clear_index {
            Some(index) => {
                let kept = self.working.split_off(index);
                summary.clear_index = Some(index);
                summary.discarded_pulls = index;
                info!(
                    position = index,
                    kept = kept.len(),
                    "found clear marker, keeping entries after it"
                );
                kept
            }
            None => self.working,
        };

        info!(
            pulls = pulls.len(),
            lines = summary.total_lines,
            skipped = summary.skipped_lines,
            "parsed combat log"
        );

        CombatLog { pulls, summary }
    }

    fn start_pull(&mut self, timestamp: &str, payload: &str) -> Outcome {
        let Some(record) = parse_pull_header(timestamp, payload) else {
            return Outcome::Malformed;
        };
        if let Some(previous) = self.open.replace(record) {
            debug!(
                pull = previous.pull_number,
                "pull header before end marker, closing previous pull"
            );
            self.working.push(previous);
        }
        Outcome::Applied
    }

    fn push_bar(&mut self, payload: &str) -> Outcome {
        let Some(open) = self.open.as_mut() else {
            return Outcome::NoOpenRecord;
        };
        match parse_bar(payload) {
            Some(bar) => {
                open.bars.push(bar);
                Outcome::Applied
            }
            None => Outcome::Malformed,
        }
    }

    fn assign_players(&mut self, payload: &str, list: PlayerList) -> Outcome {
        let Some(open) = self.open.as_mut() else {
            return Outcome::NoOpenRecord;
        };
        let Some((key, players)) = payload.split_once('&') else {
            return Outcome::Malformed;
        };
        let Some(bar) = open.bar_mut(key) else {
            return Outcome::UnmatchedKey;
        };
        let field = match list {
            PlayerList::With => &mut bar.players_with_buff,
            PlayerList::Without => &mut bar.players_without_buff,
        };
        *field = players.to_string();
        Outcome::Applied
    }

    fn clear(&mut self) -> Outcome {
        // The index is taken before the in-flight pull is closed, so that
        // pull lands at the index and survives the truncation.
        self.clear_index = Some(self.working.len());
        self.summary.clear_markers += 1;
        if let Some(open) = self.open.take() {
            self.working.push(open);
        }
        Outcome::Applied
    }

    fn end(&mut self) -> Outcome {
        match self.open.take() {
            Some(open) => {
                self.working.push(open);
                Outcome::Applied
            }
            None => Outcome::NoOpenRecord,
        }
    }
}

/// Build a pull from a `RABLOG_PULL` payload.
///
/// Needs at least [`PULL_MIN_FIELDS`] fields and a numeric pull number.
pub fn parse_pull_header(timestamp: &str, payload: &str) -> Option<PullRecord> {
    let fields: Vec<&str> = payload.split('&').collect();
    if fields.len() < PULL_MIN_FIELDS {
        return None;
    }

    let pull_number = parse_count(fields[3])?;
    let (group_type, group_size) = parse_group(fields[8])?;
    let target = fields.get(9).copied().unwrap_or(NO_TARGET);

    Some(PullRecord {
        log_timestamp: timestamp.to_string(),
        date_time: fields[0].to_string(),
        real_time: fields[1].to_string(),
        server_time: fields[2].to_string(),
        pull_number,
        profile_name: fields[4].to_string(),
        character: fields[5].to_string(),
        realm: fields[6].to_string(),
        source_player: fields[7].to_string(),
        group_type: group_type.to_string(),
        group_size,
        target: target.to_string(),
        bars: Vec::new(),
    })
}

/// Build a bar from a `RABLOG_BAR` payload.
///
/// Needs at least [`BAR_MIN_FIELDS`] fields with numeric counters; the
/// groups and classes tags default to empty.
pub fn parse_bar(payload: &str) -> Option<BarEntry> {
    let fields: Vec<&str> = payload.split('&').collect();
    if fields.len() < BAR_MIN_FIELDS {
        return None;
    }

    Some(BarEntry {
        index: parse_count(fields[0])?,
        buff_key: fields[1].to_string(),
        label: fields[2].to_string(),
        buffed: parse_count(fields[3])?,
        total: parse_count(fields[4])?,
        percentage: parse_count(fields[5])?,
        fading: parse_count(fields[6])?,
        groups: fields.get(7).copied().unwrap_or_default().to_string(),
        classes: fields.get(8).copied().unwrap_or_default().to_string(),
        players_with_buff: String::new(),
        players_without_buff: String::new(),
    })
}

/// Split `type/size`. An empty type becomes [`UNKNOWN_GROUP_TYPE`], a
/// missing or empty size becomes 0, a non-numeric size is rejected.
fn parse_group(field: &str) -> Option<(&str, u64)> {
    let mut parts = field.split('/');
    let group_type = parts
        .next()
        .filter(|t| !t.is_empty())
        .unwrap_or(UNKNOWN_GROUP_TYPE);
    let group_size = match parts.next().map(str::trim) {
        None | Some("") => 0,
        Some(size) => parse_count(size)?,
    };
    Some((group_type, group_size))
}

fn parse_count(field: &str) -> Option<u64> {
    field.trim().parse().ok()
}
