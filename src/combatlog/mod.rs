//! RABuffs Logger records embedded in `WoWCombatLog.txt`.
//!
//! Parsing is a single pass: each line is classified ([`line`]), fed to a
//! [`PullAssembler`], and the assembler applies the last clear marker once
//! the input is exhausted. Player lists stay raw on the records and are
//! interpreted on demand by [`players`] and [`roster`].

pub mod assembler;
pub mod error;
pub mod line;
pub mod players;
mod reader;
pub mod roster;
pub mod types;

pub use assembler::{ParseSummary, PullAssembler};
pub use error::LogError;
pub use line::LogLine;
pub use roster::Roster;
pub use types::{BarEntry, PlayerRef, PullRecord, NO_TARGET, UNKNOWN_GROUP_TYPE};

use crate::stats::Statistics;

/// Result of parsing a combat log.
#[derive(Debug, Clone, Default)]
pub struct CombatLog {
    /// Pulls after the last clear marker, in file order.
    pub pulls: Vec<PullRecord>,
    /// Line counters for the pass.
    pub summary: ParseSummary,
}

impl CombatLog {
    pub fn len(&self) -> usize {
        self.pulls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pulls.is_empty()
    }

    /// Players seen in any retained pull.
    pub fn roster(&self) -> Roster {
        Roster::from_pulls(&self.pulls)
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_pulls(&self.pulls)
    }
}
