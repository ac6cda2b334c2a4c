//! JSON persistence for the book collection.
//!
//! The whole collection lives in one file and is rewritten on every save.
//! Writes go to a sibling `.tmp` file first and are renamed into place, so an
//! interrupted save leaves the previous file intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::PersistenceError;
use crate::types::Book;

/// Default file name, resolved against the current directory.
pub const DEFAULT_LIBRARY_FILE: &str = "library.json";

/// Loads and saves the collection at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection. A missing file is an empty collection.
    pub fn load(&self) -> Result<Vec<Book>, PersistenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No library file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(PersistenceError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        let books: Vec<Book> =
            serde_json::from_str(&contents).map_err(|e| PersistenceError::Parse {
                path: self.path.clone(),
                source: e,
            })?;

        log::debug!("Loaded {} books from {}", books.len(), self.path.display());
        Ok(books)
    }

    /// Overwrite the file with the complete collection.
    pub fn save(&self, books: &[Book]) -> Result<(), PersistenceError> {
        let contents = to_pretty_json(books)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PersistenceError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let tmp = tmp_path(&self.path);
        fs::write(&tmp, contents).map_err(|e| PersistenceError::Write {
            path: tmp.clone(),
            source: e,
        })?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(PersistenceError::Write {
                path: self.path.clone(),
                source: e,
            });
        }

        log::debug!("Saved {} books to {}", books.len(), self.path.display());
        Ok(())
    }
}

/// Pretty-print with 4-space indentation, matching existing library files.
fn to_pretty_json(books: &[Book]) -> Result<Vec<u8>, PersistenceError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    books
        .serialize(&mut ser)
        .map_err(PersistenceError::Serialize)?;
    Ok(buf)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_LIBRARY_FILE.into());
    name.push(".tmp");
    path.with_file_name(name)
}
