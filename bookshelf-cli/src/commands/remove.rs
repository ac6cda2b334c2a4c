use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_catalog::Library;

use crate::CliError;

pub(crate) fn run_remove(library: &mut Library, title: &str) -> Result<(), CliError> {
    let removed = library.remove(title)?;

    if removed == 0 {
        log::info!(
            "No book titled {} found; library unchanged.",
            title.if_supports_color(Stdout, |t| t.bold()),
        );
    } else {
        log::info!(
            "{} Removed {} {} titled {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            removed,
            if removed == 1 { "book" } else { "books" },
            title.if_supports_color(Stdout, |t| t.bold()),
        );
    }
    Ok(())
}
