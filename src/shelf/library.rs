//! The `Library` aggregate: the single owner of the in-memory catalog.
//!
//! All reads and writes go through here. Mutating operations share one
//! shape: apply the change to the in-memory sequence, persist the whole
//! sequence, and hand back the affected book. Not-found is an ordinary
//! outcome (`Ok(None)`), never an error.
//!
//! If a save fails, the in-memory change is rolled back before the error
//! propagates, so memory and disk never disagree after a call returns.

use crate::error::Result;
use crate::model::{Book, BookStatus, SearchField};
use crate::store::BookStore;
use uuid::Uuid;

/// The book catalog, generic over its storage backend.
///
/// Construct with [`Library::open`], which performs the one and only load.
/// The store is injected and fixed for the library's lifetime.
pub struct Library<S: BookStore> {
    store: S,
    books: Vec<Book>,
    warnings: Vec<String>,
}

impl<S: BookStore> Library<S> {
    /// Load the catalog from `store`. Load-time diagnostics (corrupt file,
    /// skipped records) are retained and available via [`Library::warnings`].
    pub fn open(store: S) -> Result<Self> {
        let outcome = store.load()?;
        Ok(Self {
            store,
            books: outcome.books,
            warnings: outcome.warnings,
        })
    }

    /// Diagnostics produced while loading, for the caller to surface.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Every book, in insertion order. An empty slice means the catalog is
    /// empty; rendering that distinctly is the caller's job.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Add a book to the end of the catalog and persist. Returns the created
    /// book, generated id included.
    pub fn add_book(&mut self, title: String, author: String, year: i32) -> Result<Book> {
        let book = Book::new(title, author, year);
        self.books.push(book.clone());
        if let Err(err) = self.store.save(&self.books) {
            self.books.pop();
            return Err(err);
        }
        Ok(book)
    }

    /// Remove the book with the given id and persist. `Ok(None)` means no
    /// such book; nothing is mutated and nothing is written in that case.
    pub fn remove_book(&mut self, id: &Uuid) -> Result<Option<Book>> {
        let Some(position) = self.books.iter().position(|b| &b.id == id) else {
            return Ok(None);
        };
        let removed = self.books.remove(position);
        if let Err(err) = self.store.save(&self.books) {
            self.books.insert(position, removed);
            return Err(err);
        }
        Ok(Some(removed))
    }

    /// Set the status of the book with the given id and persist. `Ok(None)`
    /// means no such book; nothing is mutated and nothing is written.
    pub fn update_status(&mut self, id: &Uuid, status: BookStatus) -> Result<Option<Book>> {
        let Some(position) = self.books.iter().position(|b| &b.id == id) else {
            return Ok(None);
        };
        let previous = self.books[position].status;
        self.books[position].status = status;
        if let Err(err) = self.store.save(&self.books) {
            self.books[position].status = previous;
            return Err(err);
        }
        Ok(Some(self.books[position].clone()))
    }

    /// All books whose `field` equals `value`, compared case-insensitively
    /// on the stringified field (so `"1949"` matches year 1949). Exact
    /// equality, not substring match. Never mutates, never persists.
    pub fn search(&self, field: SearchField, value: &str) -> Vec<&Book> {
        let needle = value.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.field_value(field).to_lowercase() == needle)
            .collect()
    }
}
