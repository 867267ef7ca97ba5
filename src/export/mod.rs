//! Report exporters for parsed pulls.
//!
//! Every format writes to any [`Write`] and has a path based wrapper. The
//! [`ExportContext`] carries everything that is not part of the pulls
//! themselves, so output is reproducible once the clock is fixed.

pub mod csv;
pub mod json;
pub mod text;

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::combatlog::PullRecord;
use crate::config::ReportConfig;

/// Name written into reports when the input is the usual combat log.
pub const DEFAULT_SOURCE: &str = "WoWCombatLog.txt";

/// Output format selection.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Human readable report
    #[default]
    Text,
    /// One row per bar
    Csv,
    /// Full records
    Json,
    /// Text, CSV and JSON
    All,
}

impl ExportFormat {
    /// Concrete formats this selection expands to.
    pub fn expand(self) -> Vec<ExportFormat> {
        match self {
            ExportFormat::All => vec![ExportFormat::Text, ExportFormat::Csv, ExportFormat::Json],
            format => vec![format],
        }
    }

    /// File extension, `None` for [`ExportFormat::All`].
    pub fn extension(self) -> Option<&'static str> {
        match self {
            ExportFormat::Text => Some("txt"),
            ExportFormat::Csv => Some("csv"),
            ExportFormat::Json => Some("json"),
            ExportFormat::All => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::All => "all",
        }
    }

    /// Where this format is written: `output` with its extension replaced,
    /// or `<stem>.<ext>` in the working directory.
    pub fn output_path(self, output: Option<&Path>, stem: &str) -> PathBuf {
        let base = output.map_or_else(|| PathBuf::from(stem), Path::to_path_buf);
        match self.extension() {
            Some(ext) => base.with_extension(ext),
            None => base,
        }
    }

    /// Write `pulls` in this format.
    ///
    /// # Errors
    ///
    /// Fails for [`ExportFormat::All`], which has no single rendering, and
    /// on I/O errors.
    pub fn write_to<W: Write>(
        self,
        pulls: &[PullRecord],
        ctx: &ExportContext,
        writer: &mut W,
    ) -> Result<()> {
        match self {
            ExportFormat::Text => text::write_to(pulls, ctx, writer),
            ExportFormat::Csv => csv::write_to(pulls, writer),
            ExportFormat::Json => json::write_to(pulls, ctx, writer),
            ExportFormat::All => anyhow::bail!("'all' must be expanded before writing"),
        }
    }

    /// Create `path` and write `pulls` into it.
    pub fn write<P: AsRef<Path>>(
        self,
        pulls: &[PullRecord],
        ctx: &ExportContext,
        path: P,
    ) -> Result<()> {
        let path = path.as_ref();
        let file =
            fs::File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
        let mut writer = BufWriter::new(file);
        self.write_to(pulls, ctx, &mut writer)?;
        writer
            .flush()
            .with_context(|| format!("Failed to write file: {:?}", path))
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Report metadata that does not come from the combat log.
#[derive(Debug, Clone)]
pub struct ExportContext {
    /// Timestamp printed as the generation/export time.
    pub generated: DateTime<Local>,
    /// Input name recorded in the JSON export.
    pub source: String,
    /// Thresholds for the text report status markers.
    pub report: ReportConfig,
}

impl ExportContext {
    pub fn new(source: impl Into<String>, report: ReportConfig) -> Self {
        Self {
            generated: Local::now(),
            source: source.into(),
            report,
        }
    }
}

impl Default for ExportContext {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE, ReportConfig::default())
    }
}
