//! A loaded collection bound to the file it came from.

use std::path::Path;

use crate::error::CatalogError;
use crate::operations;
use crate::store::JsonStore;
use crate::types::{Book, LibraryStats, NewBook};

/// The in-memory collection plus the store it is persisted to.
///
/// Mutating methods save the whole collection before returning, so memory
/// and disk agree whenever control is back with the caller.
#[derive(Debug)]
pub struct Library {
    store: JsonStore,
    books: Vec<Book>,
}

impl Library {
    /// Load the collection at `path`, or start empty if the file is absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let store = JsonStore::new(path.as_ref());
        let books = store.load()?;
        Ok(Self { store, books })
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    pub fn books(&self) -> &[Book] {
        operations::list(&self.books)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append `new` and save. A failed save drops the new entry again.
    pub fn add(&mut self, new: NewBook) -> Result<(), CatalogError> {
        operations::add_book(&mut self.books, new)?;
        if let Err(e) = self.store.save(&self.books) {
            self.books.pop();
            return Err(e.into());
        }
        log::debug!("Library now holds {} books", self.books.len());
        Ok(())
    }

    /// Remove all books titled `title` (case-insensitive) and save.
    ///
    /// The file is rewritten even when nothing matched. The in-memory
    /// collection only changes once the save succeeds.
    pub fn remove(&mut self, title: &str) -> Result<usize, CatalogError> {
        let mut kept = self.books.clone();
        let removed = operations::remove_by_title(&mut kept, title);
        self.store.save(&kept)?;
        self.books = kept;
        log::debug!("Removed {removed} books titled {title:?}");
        Ok(removed)
    }

    pub fn search(&self, keyword: &str) -> Vec<Book> {
        operations::search(&self.books, keyword)
    }

    pub fn statistics(&self) -> LibraryStats {
        operations::statistics(&self.books)
    }
}
