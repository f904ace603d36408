use super::{BookStore, LoadOutcome};
use crate::error::Result;
use crate::model::Book;

/// In-memory storage for testing and development.
/// Does NOT persist data across instances.
#[derive(Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `save` has been called. Lets tests assert that reads
    /// never write.
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    /// The last persisted snapshot.
    pub fn persisted(&self) -> &[Book] {
        &self.books
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<LoadOutcome> {
        Ok(LoadOutcome {
            books: self.books.clone(),
            warnings: Vec::new(),
        })
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.books = books.to_vec();
        self.save_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::BookStatus;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            let mut books = self.store.books.clone();
            for i in 0..count {
                books.push(Book::new(
                    format!("Test Book {}", i + 1),
                    format!("Author {}", i + 1),
                    1900 + i as i32,
                ));
            }
            self.store.save(&books).unwrap();
            self.store.save_count = 0;
            self
        }

        pub fn with_book(mut self, title: &str, author: &str, year: i32) -> Self {
            let mut books = self.store.books.clone();
            books.push(Book::new(title.to_string(), author.to_string(), year));
            self.store.save(&books).unwrap();
            self.store.save_count = 0;
            self
        }

        pub fn with_checked_out_book(mut self, title: &str, author: &str, year: i32) -> Self {
            let mut book = Book::new(title.to_string(), author.to_string(), year);
            book.status = BookStatus::CheckedOut;
            let mut books = self.store.books.clone();
            books.push(book);
            self.store.save(&books).unwrap();
            self.store.save_count = 0;
            self
        }
    }
}
