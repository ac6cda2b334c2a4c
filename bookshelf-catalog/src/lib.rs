//! Personal book catalog: data model, JSON persistence, and catalog operations.
//!
//! This crate holds the whole data-management core without any terminal I/O.
//! Front ends (such as `bookshelf-cli`) open a [`Library`], call its
//! operations, and render whatever comes back.

pub mod config;
pub mod error;
pub mod library;
pub mod operations;
pub mod store;
pub mod types;

pub use config::{Settings, SettingSource};
pub use error::{CatalogError, ConfigError, PersistenceError, ValidationError};
pub use library::Library;
pub use operations::{add_book, list, remove_by_title, search, statistics};
pub use store::JsonStore;
pub use types::*;
