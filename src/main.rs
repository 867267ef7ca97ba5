//! rablog - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use rablog::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    rablog::logging::init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Export {
            input,
            output,
            format,
        } => commands::export::handle(input.file.as_deref(), output.as_deref(), format),
        Commands::Stats { input } => commands::stats::handle(input.file.as_deref()),
        Commands::Roster { input } => commands::roster::handle(input.file.as_deref()),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
