//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::export::ExportFormat;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Where to look for the combat log when no path is given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Candidates tried in order, relative to the working directory
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<PathBuf>,
}

pub fn default_search_paths() -> Vec<PathBuf> {
    [
        "Logs/WoWCombatLog.txt",
        "../Logs/WoWCombatLog.txt",
        "../../Logs/WoWCombatLog.txt",
        "WoWCombatLog.txt",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            search_paths: default_search_paths(),
        }
    }
}

/// Export defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: ExportFormat,
    /// File name (without extension) used when `--output` is not given
    #[serde(default = "default_output_stem")]
    pub output_stem: String,
}

pub fn default_output_stem() -> String {
    "rabuffs_combatlog".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            output_stem: default_output_stem(),
        }
    }
}

/// Coverage thresholds for the text report status markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Percentage at or above which a buff is fully covered
    #[serde(default = "default_good_threshold")]
    pub good_threshold: u32,
    /// Percentage at or above which a buff is only a warning
    #[serde(default = "default_warn_threshold")]
    pub warn_threshold: u32,
}

pub fn default_good_threshold() -> u32 {
    95
}

pub fn default_warn_threshold() -> u32 {
    80
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            good_threshold: default_good_threshold(),
            warn_threshold: default_warn_threshold(),
        }
    }
}

impl ReportConfig {
    /// Validate threshold ordering.
    pub fn validate(&self) -> Result<(), String> {
        if self.good_threshold > 100 {
            return Err(format!(
                "report.good_threshold {} exceeds maximum (100)",
                self.good_threshold
            ));
        }
        if self.warn_threshold > self.good_threshold {
            return Err(format!(
                "report.warn_threshold {} is above report.good_threshold {}",
                self.warn_threshold, self.good_threshold
            ));
        }
        Ok(())
    }

    /// Status bucket for a coverage percentage.
    pub fn status(&self, percentage: u64) -> CoverageStatus {
        if percentage >= u64::from(self.good_threshold) {
            CoverageStatus::Good
        } else if percentage >= u64::from(self.warn_threshold) {
            CoverageStatus::Warning
        } else {
            CoverageStatus::Poor
        }
    }
}

/// Coverage bucket shown in front of each bar of the text report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageStatus {
    Good,
    Warning,
    Poor,
}

impl CoverageStatus {
    pub fn symbol(self) -> char {
        match self {
            CoverageStatus::Good => '✓',
            CoverageStatus::Warning => '⚠',
            CoverageStatus::Poor => '✗',
        }
    }
}
