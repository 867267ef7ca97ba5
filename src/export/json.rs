//! JSON export of the full records.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use serde::Serialize;

use super::ExportContext;
use crate::combatlog::PullRecord;

pub const FORMAT_VERSION: &str = "1.0.0";

/// Top level JSON document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    version: &'static str,
    source: &'a str,
    exported: String,
    total_entries: usize,
    logs: &'a [PullRecord],
}

pub fn write_to<W: Write>(pulls: &[PullRecord], ctx: &ExportContext, w: &mut W) -> Result<()> {
    let document = Document {
        version: FORMAT_VERSION,
        source: &ctx.source,
        exported: ctx.generated.to_rfc3339_opts(SecondsFormat::Secs, false),
        total_entries: pulls.len(),
        logs: pulls,
    };
    serde_json::to_writer_pretty(&mut *w, &document).context("Failed to serialize JSON export")?;
    writeln!(w)?;
    Ok(())
}
