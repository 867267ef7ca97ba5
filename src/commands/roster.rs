//! Roster command handler

use std::path::Path;

use anyhow::Result;

use rablog::{Config, Roster};

use super::load_log;

/// Print players grouped by class.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let Some(loaded) = load_log(file, &config)? else {
        return Ok(());
    };

    println!();
    print!("{}", render(&loaded.log.roster()));
    Ok(())
}

fn render(roster: &Roster) -> String {
    if roster.is_empty() {
        return "No players found in player lists\n".to_string();
    }

    let mut out = format!("Player roster ({} players)\n", roster.len());
    for (class, names) in roster.by_class() {
        out.push_str(&format!("{} : {}\n", class, names.join(", ")));
    }
    out
}
