//! Combat log input.
//!
//! Parses RABuffs records out of a `WoWCombatLog.txt` from a path, any
//! buffered reader, or an in-memory string. The combat log mixes addon
//! output with regular events and is not guaranteed to be valid UTF-8, so
//! lines are decoded lossily instead of failing the whole file.
//!
//! # Example
//!
//! ```no_run
//! use rablog::CombatLog;
//!
//! let log = CombatLog::parse("Logs/WoWCombatLog.txt")?;
//! println!("{} pulls", log.pulls.len());
//! # Ok::<(), rablog::combatlog::LogError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::assembler::PullAssembler;
use super::error::LogError;
use super::CombatLog;

/// Read buffer for combat log files, which are routinely hundreds of MB.
const READ_BUFFER_SIZE: usize = 1024 * 1024;

impl CombatLog {
    /// Parse a combat log file.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the file cannot be opened and
    /// [`LogError::Read`] if reading fails part way.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading combat log");

        Self::parse_reader(BufReader::with_capacity(READ_BUFFER_SIZE, file))
    }

    /// Parse a combat log from any buffered reader.
    ///
    /// Invalid UTF-8 sequences are replaced, never reported.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Read`] if the underlying reader fails.
    pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<Self, LogError> {
        let mut assembler = PullAssembler::new();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            line_number += 1;
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| LogError::Read {
                    line: line_number,
                    source,
                })?;
            if read == 0 {
                break;
            }
            assembler.feed(&String::from_utf8_lossy(&buf));
        }

        Ok(assembler.finish())
    }

    /// Parse already decoded lines, in order.
    pub fn parse_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut assembler = PullAssembler::new();
        for line in lines {
            assembler.feed(line.as_ref());
        }
        assembler.finish()
    }

    /// Parse a combat log held in memory.
    pub fn parse_str(content: &str) -> Self {
        Self::parse_lines(content.lines())
    }
}
