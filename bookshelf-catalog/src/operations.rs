//! Catalog operations over an explicit collection.
//!
//! These functions never touch the disk; [`crate::Library`] pairs them with
//! a [`crate::JsonStore`] save.

use crate::error::ValidationError;
use crate::types::{Book, LibraryStats, NewBook};

/// Validate `new` and append it to the end of `books`.
///
/// Duplicate titles are allowed. Blank title, author, or genre is rejected
/// because removal and search key off those fields.
pub fn add_book(books: &mut Vec<Book>, new: NewBook) -> Result<(), ValidationError> {
    require_non_empty("title", &new.title)?;
    require_non_empty("author", &new.author)?;
    require_non_empty("genre", &new.genre)?;

    books.push(Book {
        title: new.title,
        author: new.author,
        year: new.year,
        genre: new.genre,
        read: new.read,
    });
    Ok(())
}

/// Remove every book whose title equals `title`, ignoring case.
///
/// Returns how many entries were removed; zero is not an error.
pub fn remove_by_title(books: &mut Vec<Book>, title: &str) -> usize {
    let needle = title.to_lowercase();
    let before = books.len();
    books.retain(|b| b.title.to_lowercase() != needle);
    before - books.len()
}

/// Books whose title or author contains `keyword`, case-insensitively,
/// in collection order. An empty keyword matches everything.
pub fn search(books: &[Book], keyword: &str) -> Vec<Book> {
    let needle = keyword.to_lowercase();
    books
        .iter()
        .filter(|b| {
            b.title.to_lowercase().contains(&needle) || b.author.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// The full collection in insertion order.
pub fn list(books: &[Book]) -> &[Book] {
    books
}

pub fn statistics(books: &[Book]) -> LibraryStats {
    let total = books.len();
    let read = books.iter().filter(|b| b.read).count();
    let percent_read = if total > 0 {
        read as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    LibraryStats {
        total,
        read,
        percent_read,
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(())
    }
}
