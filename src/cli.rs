//! CLI definitions for rablog
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so the command tree can be inspected from tests.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::export::ExportFormat;

/// Build clap styles.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::Yellow.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "rablog")]
#[command(about = "Extract RABuffs Logger buff checks from WoWCombatLog.txt")]
#[command(
    long_about = "rablog - Extract RABuffs Logger buff checks from WoWCombatLog.txt.

The RABuffs Logger addon writes one block of RABLOG_* lines per buff check
into the combat log. rablog rebuilds those checks (pulls), honours
/rablog clear markers, and exports them as text, CSV, or JSON.

QUICK START:
    rablog export                       Export to rabuffs_combatlog.txt
    rablog export -f all                Export text, CSV and JSON
    rablog stats                        Show coverage statistics
    rablog roster                       List players by class

Without a FILE argument the log is searched at Logs/WoWCombatLog.txt,
../Logs/WoWCombatLog.txt, ../../Logs/WoWCombatLog.txt and WoWCombatLog.txt."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Combat log argument shared by the parsing commands.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Path to WoWCombatLog.txt
    #[arg(help = "Path to WoWCombatLog.txt (searched for when omitted)")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export buff checks to text, CSV, or JSON
    #[command(long_about = "Parse the combat log and export every buff check.

The output extension always matches the format, so '-o raid' writes
raid.txt, raid.csv and/or raid.json. Statistics are printed afterwards.

EXAMPLES:
    rablog export                                 Text report in the current directory
    rablog export -f csv                          CSV, one row per buff
    rablog export -f all -o reports/raid          All three formats
    rablog export ~/wow/Logs/WoWCombatLog.txt     Explicit input file")]
    Export {
        #[command(flatten)]
        input: InputArgs,
        /// Output file (extension is replaced per format)
        #[arg(short, long, help = "Output file (default: rabuffs_combatlog.<ext>)")]
        output: Option<PathBuf>,
        /// Export format
        #[arg(short, long, value_enum, help = "Export format (default from config: text)")]
        format: Option<ExportFormat>,
    },

    /// Show statistics only
    #[command(long_about = "Parse the combat log and print statistics without exporting.

Shows pulls per profile, average coverage per buff, and the time range.

EXAMPLE:
    rablog stats")]
    Stats {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List players seen in the log, grouped by class
    #[command(long_about = "Print every player found in the buff player lists.

A player keeps the first class seen for them. Players are grouped by class,
both sorted alphabetically.

EXAMPLE:
    rablog roster")]
    Roster {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the current configuration in TOML format.

EXAMPLE:
    rablog config show")]
    Show,
    /// Open configuration file in your default editor
    #[command(long_about = "Open the configuration file in your default editor.

Uses the $EDITOR environment variable (defaults to 'vi').
Config file location: ~/.config/rablog/config.toml

EXAMPLE:
    rablog config edit
    EDITOR=nano rablog config edit")]
    Edit,
}
