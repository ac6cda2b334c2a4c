use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_catalog::Library;

pub(crate) fn run_stats(library: &Library) {
    let stats = library.statistics();

    log::info!(
        "{}",
        "Library Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Library: {}", library.path().display());
    crate::logging::log_blank();
    log::info!("  Total books:      {:>8}", stats.total);
    log::info!("  Read:             {:>8}", stats.read);
    log::info!("  Unread:           {:>8}", stats.unread());
    log::info!("  Percentage read:  {:>7.2}%", stats.percent_read);
}
