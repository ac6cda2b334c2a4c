//! Data model types for the book catalog.

use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// Field names on disk are capitalized (`Title`, `Author`, ...) so existing
/// `library.json` files stay readable. `title` is the lookup key for removal
/// but is not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Read")]
    pub read: bool,
}

impl Book {
    /// "Read" or "Unread".
    pub fn read_label(&self) -> &'static str {
        if self.read { "Read" } else { "Unread" }
    }
}

/// Unvalidated input for a new catalog entry.
#[derive(Debug, Clone, Default)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: u32,
    pub genre: String,
    pub read: bool,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: u32,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        }
    }
}

/// Aggregate read/unread counts for a collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
    /// Share of read books in percent; `0.0` for an empty collection.
    pub percent_read: f64,
}

impl LibraryStats {
    pub fn unread(&self) -> usize {
        self.total - self.read
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_label() {
        let book = Book {
            title: "Emma".to_string(),
            author: "Jane Austen".to_string(),
            year: 1815,
            genre: "Novel".to_string(),
            read: false,
        };
        assert_eq!(book.read_label(), "Unread");
    }
}
