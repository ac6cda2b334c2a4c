//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Keep track of the books in your personal library", long_about = None)]
pub(crate) struct Cli {
    /// Library file to use (overrides $BOOKSHELF_LIBRARY and the config file)
    #[arg(short, long, global = true)]
    pub library: Option<PathBuf>,

    /// Your name, used to greet you (overrides $BOOKSHELF_OWNER and the config file)
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Fields for a new catalog entry.
#[derive(Args, Clone, Debug)]
pub(crate) struct BookArgs {
    /// Book title
    #[arg(short, long)]
    pub title: String,

    /// Author name
    #[arg(short, long)]
    pub author: String,

    /// Publication year
    #[arg(short, long)]
    pub year: u32,

    /// Genre (e.g., "Science Fiction", "Biography")
    #[arg(short, long)]
    pub genre: String,

    /// Mark the book as already read
    #[arg(short, long)]
    pub read: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Add a book to the library
    Add {
        #[command(flatten)]
        book: BookArgs,
    },

    /// Remove every book with the given title (case-insensitive)
    Remove {
        /// Exact title to remove
        title: String,
    },

    /// Search titles and authors for a keyword (case-insensitive substring)
    Search {
        /// Keyword to look for
        keyword: String,
    },

    /// Display all books in the library
    List,

    /// Show how many books you have and how many you've read
    Stats,

    /// Manage the bookshelf configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and their sources
    Show,

    /// Print the config file path
    Path,

    /// Store settings in the config file
    Set {
        /// Library file to use by default
        #[arg(long = "library-path")]
        library_path: Option<PathBuf>,

        /// Owner name used in the greeting
        #[arg(long)]
        owner: Option<String>,
    },
}
