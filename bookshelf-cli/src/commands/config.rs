use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_catalog::config::{self, Settings};

use crate::CliError;

/// Show resolved settings and where each came from.
pub(crate) fn run_config_show(settings: &Settings) {
    log::info!(
        "{}",
        "Bookshelf Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::logging::log_blank();

    match config::config_path() {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    crate::logging::log_blank();

    log::info!(
        "  {:<8} {} {}",
        "library",
        settings.library_path.display(),
        format!("({})", settings.library_source).if_supports_color(Stdout, |t| t.dimmed()),
    );
    match &settings.owner {
        Some(owner) => log::info!(
            "  {:<8} {} {}",
            "owner",
            owner,
            format!("({})", settings.owner_source).if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None => log::info!(
            "  {:<8} {}",
            "owner",
            "not set".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    let path = config::config_path()
        .ok_or_else(|| CliError::config("Could not determine config directory"))?;
    log::info!("{}", path.display());
    Ok(())
}

/// Write the given values into the config file.
pub(crate) fn run_config_set(
    library_path: Option<std::path::PathBuf>,
    owner: Option<String>,
) -> Result<(), CliError> {
    if library_path.is_none() && owner.is_none() {
        log::warn!("Nothing to set. Pass --library-path and/or --owner.");
        return Ok(());
    }
    let path = config::save_to_file(library_path, owner)?;
    log::info!(
        "{} Saved config to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display(),
    );
    Ok(())
}
