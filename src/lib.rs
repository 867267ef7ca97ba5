//! RABuffs Logger combat log parser
//!
//! Rebuilds RABuffs buff checks from `WoWCombatLog.txt` and exports them as
//! text, CSV, or JSON.

pub mod cli;
pub mod combatlog;
pub mod config;
pub mod export;
pub mod files;
pub mod logging;
pub mod stats;

pub use combatlog::{BarEntry, CombatLog, LogError, PlayerRef, PullRecord, Roster};
pub use config::Config;
pub use export::{ExportContext, ExportFormat};
pub use stats::Statistics;
