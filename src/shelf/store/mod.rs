//! # Storage Layer
//!
//! The [`BookStore`] trait is the persistence boundary: the whole catalog is
//! loaded and saved as one unit.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep catalog logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: Production storage — a single pretty-printed
//!   JSON array in one file
//! - [`memory::InMemoryStore`]: In-memory storage for testing, with a save
//!   counter so tests can assert that reads never persist
//!
//! ## Recovery Policy
//!
//! `load` is deliberately forgiving: a missing file is the normal first-run
//! state and loads as an empty catalog, and an unreadable file loads as an
//! empty catalog with a warning instead of an error. The warnings ride back
//! on [`LoadOutcome`]; the store never prints.

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

/// What a load produced: the books that could be read, plus any diagnostics
/// the caller should surface to the user.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub books: Vec<Book>,
    pub warnings: Vec<String>,
}

impl LoadOutcome {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_warning(message: impl Into<String>) -> Self {
        Self {
            books: Vec::new(),
            warnings: vec![message.into()],
        }
    }
}

/// Abstract interface for catalog persistence.
///
/// Implementations must preserve the order of the sequence they are given:
/// the catalog is insertion-ordered and `load` must return books in the
/// order `save` received them.
pub trait BookStore {
    /// Load the full catalog.
    fn load(&self) -> Result<LoadOutcome>;

    /// Persist the full catalog, replacing whatever was stored before.
    fn save(&mut self, books: &[Book]) -> Result<()>;
}
