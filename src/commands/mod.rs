//! Command handlers for the rablog CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod export;
pub mod roster;
pub mod stats;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use rablog::files::resolve_input;
use rablog::{CombatLog, Config};

/// A parsed combat log and where it came from.
pub struct LoadedLog {
    pub path: PathBuf,
    pub log: CombatLog,
}

/// Resolve, report, and parse the input combat log.
///
/// Returns `None` after printing the addon setup hints when the log holds no
/// RABuffs entries.
pub fn load_log(file: Option<&Path>, config: &Config) -> Result<Option<LoadedLog>> {
    let path = resolve_input(file, &config.input)?;

    println!("Reading: {}", path.display());
    if let Ok(meta) = fs::metadata(&path) {
        println!("   File size: {}", format_size(meta.len()));
    }

    let log = CombatLog::parse(&path)?;
    println!("Found {} RABLOG entries", log.len());

    if log.is_empty() {
        print_no_entries_hint();
        return Ok(None);
    }

    Ok(Some(LoadedLog { path, log }))
}

fn print_no_entries_hint() {
    println!("No RABLOG entries found in file");
    println!();
    println!("Make sure:");
    println!("1. RABuffs Logger is loaded");
    println!("2. File logging is enabled: /rablog file");
    println!("3. You've triggered some pulls or used: /rablog test");
}

pub fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
