//! Classification of single combat log lines.
//!
//! SuperWoW writes addon output into the same file as the regular combat
//! log, so RABuffs lines are found by their tag anywhere on the line rather
//! than by anchoring. Only the pull header carries a usable timestamp; the
//! other kinds just need `<TAG> <payload>`.

/// Pull header tag.
pub const PULL_TAG: &str = "RABLOG_PULL:";
/// Bar (one tracked buff) tag.
pub const BAR_TAG: &str = "RABLOG_BAR:";
/// Players-with-buff tag.
pub const PLAYERS_WITH_TAG: &str = "RABLOG_PLAYERS_WITH:";
/// Players-without-buff tag.
pub const PLAYERS_WITHOUT_TAG: &str = "RABLOG_PLAYERS_WITHOUT:";
/// History reset tag.
pub const CLEAR_TAG: &str = "RABLOG_CLEAR:";
/// Pull terminator tag.
pub const END_TAG: &str = "RABLOG_END:";

/// One classified line, borrowing its payload from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLine<'a> {
    /// `<timestamp>  RABLOG_PULL: <payload>`
    StartPull { timestamp: &'a str, payload: &'a str },
    /// `RABLOG_BAR: <payload>`
    Bar(&'a str),
    /// `RABLOG_PLAYERS_WITH: <key>&<players>`
    PlayersWith(&'a str),
    /// `RABLOG_PLAYERS_WITHOUT: <key>&<players>`
    PlayersWithout(&'a str),
    /// `RABLOG_CLEAR:`
    Clear,
    /// `RABLOG_END: <pull number>` (payload may be empty)
    End(&'a str),
    /// Anything else, including tagged lines whose shape does not match.
    Unrecognized,
}

impl<'a> LogLine<'a> {
    /// Classify one raw line.
    ///
    /// Tags are checked in a fixed order (pull, bar, players-with,
    /// players-without, clear, end) and the first one present decides the
    /// kind. A tagged line that does not have the expected shape is
    /// [`LogLine::Unrecognized`], it never falls through to a later tag.
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();

        if let Some(pos) = line.find(PULL_TAG) {
            return start_pull(line, pos).unwrap_or(LogLine::Unrecognized);
        }
        if let Some(pos) = line.find(BAR_TAG) {
            return tagged_payload(line, pos + BAR_TAG.len())
                .map_or(LogLine::Unrecognized, LogLine::Bar);
        }
        if let Some(pos) = line.find(PLAYERS_WITH_TAG) {
            return tagged_payload(line, pos + PLAYERS_WITH_TAG.len())
                .map_or(LogLine::Unrecognized, LogLine::PlayersWith);
        }
        if let Some(pos) = line.find(PLAYERS_WITHOUT_TAG) {
            return tagged_payload(line, pos + PLAYERS_WITHOUT_TAG.len())
                .map_or(LogLine::Unrecognized, LogLine::PlayersWithout);
        }
        if line.contains(CLEAR_TAG) {
            return LogLine::Clear;
        }
        if let Some(pos) = line.find(END_TAG) {
            return LogLine::End(line[pos + END_TAG.len()..].trim());
        }

        LogLine::Unrecognized
    }

    /// Whether this line is one of the six RABuffs kinds.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, LogLine::Unrecognized)
    }
}

fn start_pull(line: &str, tag_pos: usize) -> Option<LogLine<'_>> {
    let prefix = &line[..tag_pos];
    let stamped = prefix.trim_end();
    if stamped.len() == prefix.len() {
        return None;
    }
    let timestamp = trailing_timestamp(stamped)?;
    let payload = tagged_payload(line, tag_pos + PULL_TAG.len())?;
    Some(LogLine::StartPull { timestamp, payload })
}

/// Payload after a tag: at least one whitespace character, then non-empty text.
fn tagged_payload(line: &str, after_tag: usize) -> Option<&str> {
    let rest = &line[after_tag..];
    let payload = rest.trim_start();
    if payload.len() == rest.len() || payload.is_empty() {
        return None;
    }
    Some(payload)
}

/// `digits/digits digits:digits:digits.digits` at the very end of `s`.
fn trailing_timestamp(s: &str) -> Option<&str> {
    // Matched right to left.
    const SEPARATORS: [u8; 5] = [b'.', b':', b':', b' ', b'/'];

    let bytes = s.as_bytes();
    let mut start = digits_before(bytes, bytes.len())?;
    for sep in SEPARATORS {
        if start == 0 || bytes[start - 1] != sep {
            return None;
        }
        start = digits_before(bytes, start - 1)?;
    }
    Some(&s[start..])
}

/// Start of the non-empty run of ASCII digits ending at `end`.
fn digits_before(bytes: &[u8], end: usize) -> Option<usize> {
    let start = bytes[..end]
        .iter()
        .rposition(|b| !b.is_ascii_digit())
        .map_or(0, |p| p + 1);
    (start < end).then_some(start)
}
