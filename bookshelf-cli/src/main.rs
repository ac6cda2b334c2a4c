//! bookshelf CLI
//!
//! Command-line front end for the personal book catalog.

mod cli_types;
mod commands;
mod error;
mod logging;

use std::path::PathBuf;

use clap::Parser;

use bookshelf_catalog::{Library, Settings};

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        library,
        name,
        command,
        ..
    } = cli;

    match command {
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(&load_settings(library, name)?);
                Ok(())
            }
            // Path and Set work even when the config file cannot be parsed.
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Set {
                library_path,
                owner,
            } => commands::config::run_config_set(library_path, owner),
        },
        Commands::Add { book } => commands::add::run_add(&mut open_library(library, name)?, book),
        Commands::Remove { title } => {
            commands::remove::run_remove(&mut open_library(library, name)?, &title)
        }
        Commands::Search { keyword } => {
            commands::search::run_search(&open_library(library, name)?, &keyword);
            Ok(())
        }
        Commands::List => {
            commands::list::run_list(&open_library(library, name)?);
            Ok(())
        }
        Commands::Stats => {
            commands::stats::run_stats(&open_library(library, name)?);
            Ok(())
        }
    }
}

fn load_settings(library: Option<PathBuf>, name: Option<String>) -> Result<Settings, CliError> {
    let settings = Settings::load(library, name)?;
    log::debug!(
        "Using library {} ({})",
        settings.library_path.display(),
        settings.library_source,
    );
    Ok(settings)
}

/// Resolve settings, greet the owner if known, and load the library file.
fn open_library(library: Option<PathBuf>, name: Option<String>) -> Result<Library, CliError> {
    let settings = load_settings(library, name)?;
    if let Some(owner) = &settings.owner {
        log::info!("Welcome, {owner}!");
        logging::log_blank();
    }
    Ok(Library::open(&settings.library_path)?)
}
