use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "Manage a personal book catalog from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the catalog file (defaults to the user data directory)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the catalog
    #[command(alias = "a")]
    Add {
        /// Title of the book
        title: String,

        /// Author of the book
        author: String,

        /// Publication year
        #[arg(allow_hyphen_values = true)]
        year: i32,
    },

    /// Remove a book by its id
    #[command(alias = "rm")]
    Remove {
        /// Id of the book, as printed by `list`
        id: String,
    },

    /// Find books by an exact field value
    #[command(alias = "f")]
    Find {
        /// Field to search by (title, author or year)
        field: String,

        /// Value to match (case-insensitive, exact)
        value: String,
    },

    /// List every book in the catalog
    #[command(alias = "ls")]
    List,

    /// Set a book's status ('available' or 'checked-out')
    Status {
        /// Id of the book, as printed by `list`
        id: String,

        /// The new status
        status: String,
    },
}
