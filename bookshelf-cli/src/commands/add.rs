use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_catalog::{Library, NewBook};

use crate::CliError;
use crate::cli_types::BookArgs;

pub(crate) fn run_add(library: &mut Library, args: BookArgs) -> Result<(), CliError> {
    let new = NewBook::new(args.title, args.author, args.year, args.genre, args.read);
    let title = new.title.clone();
    library.add(new)?;

    log::info!(
        "{} Added {} ({} books in library)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        title.if_supports_color(Stdout, |t| t.bold()),
        library.len(),
    );
    Ok(())
}
