//! Export command handler

use std::path::Path;

use anyhow::{bail, Result};
use tracing::error;

use rablog::export::DEFAULT_SOURCE;
use rablog::{Config, ExportContext, ExportFormat};

use super::load_log;

/// Parse the combat log and write every requested format.
///
/// A failing format does not stop the others; the command still fails at the
/// end so scripts notice.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    file: Option<&Path>,
    output: Option<&Path>,
    format: Option<ExportFormat>,
) -> Result<()> {
    let config = Config::load()?;
    let Some(loaded) = load_log(file, &config)? else {
        return Ok(());
    };

    let source = loaded
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());
    let ctx = ExportContext::new(source, config.report);

    let mut failed = Vec::new();
    for fmt in format.unwrap_or(config.export.format).expand() {
        let path = fmt.output_path(output, &config.export.output_stem);
        match fmt.write(&loaded.log.pulls, &ctx, &path) {
            Ok(()) => println!("{} export saved to: {}", capitalize(fmt.name()), path.display()),
            Err(e) => {
                error!(format = %fmt, path = %path.display(), "export failed: {:#}", e);
                eprintln!("Error: {} export failed: {:#}", fmt, e);
                failed.push(fmt.name());
            }
        }
    }

    println!();
    print!("{}", loaded.log.statistics().summary());

    if !failed.is_empty() {
        bail!("Failed to export: {}", failed.join(", "));
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
