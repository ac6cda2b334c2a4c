pub(crate) mod add;
pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod remove;
pub(crate) mod search;
pub(crate) mod stats;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_catalog::Book;

/// One-line rendering used by `list` and `search`.
pub(crate) fn format_book(book: &Book) -> String {
    let status = if book.read {
        book.read_label()
            .if_supports_color(Stdout, |t| t.green())
            .to_string()
    } else {
        book.read_label()
            .if_supports_color(Stdout, |t| t.dimmed())
            .to_string()
    };
    format!(
        "{} by {} ({}) - {} - {}",
        book.title.if_supports_color(Stdout, |t| t.bold()),
        book.author.if_supports_color(Stdout, |t| t.cyan()),
        book.year,
        book.genre,
        status,
    )
}

pub(crate) fn log_books(books: &[Book]) {
    for book in books {
        log::info!("  {}", format_book(book));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_book_without_color() {
        owo_colors::set_override(false);
        let book = Book {
            title: "Emma".to_string(),
            author: "Jane Austen".to_string(),
            year: 1815,
            genre: "Novel".to_string(),
            read: false,
        };
        assert_eq!(format_book(&book), "Emma by Jane Austen (1815) - Novel - Unread");
    }
}
