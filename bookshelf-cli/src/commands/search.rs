use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_catalog::Library;

use super::log_books;

pub(crate) fn run_search(library: &Library, keyword: &str) {
    let results = library.search(keyword);

    if results.is_empty() {
        log::warn!("No matching books found.");
        return;
    }

    log::info!(
        "{} matching {:?}:",
        format!("{} found", results.len()).if_supports_color(Stdout, |t| t.bold()),
        keyword,
    );
    log_books(&results);
}
