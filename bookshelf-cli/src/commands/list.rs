use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_catalog::Library;

use super::log_books;

pub(crate) fn run_list(library: &Library) {
    if library.is_empty() {
        log::info!(
            "{}",
            "Your library is empty.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return;
    }

    log::info!(
        "{} ({})",
        "Your Library".if_supports_color(Stdout, |t| t.bold()),
        library.path().display(),
    );
    log_books(library.books());
}
