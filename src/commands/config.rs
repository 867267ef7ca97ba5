//! Config subcommands handler

use anyhow::{Context, Result};

use rablog::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    println!("# {}", Config::config_path()?.display());
    println!("{}", toml_str);
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;

    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!("Opening {} with {}", config_path.display(), editor);

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;
    if !status.success() {
        anyhow::bail!("Editor exited with {}", status);
    }

    // Catch mistakes while the user is still at the terminal.
    Config::load().context("Config file is invalid after editing")?;
    Ok(())
}
