//! Stats command handler

use std::path::Path;

use anyhow::Result;

use rablog::Config;

use super::load_log;

/// Print statistics for the combat log without exporting.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    if let Some(loaded) = load_log(file, &config)? {
        println!();
        print!("{}", loaded.log.statistics().summary());
    }
    Ok(())
}
