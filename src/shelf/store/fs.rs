use super::{BookStore, LoadOutcome};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs;
use std::path::PathBuf;

/// File-backed store: the catalog is one JSON array in one file, rewritten
/// whole on every save.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> Result<LoadOutcome> {
        if !self.path.exists() {
            // First run: no file yet, empty catalog.
            return Ok(LoadOutcome::empty());
        }

        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        let raw: Vec<serde_json::Value> = match serde_json::from_str(&content) {
            Ok(raw) => raw,
            Err(err) => {
                // Corrupt file: recover as an empty catalog rather than
                // refusing to start. The next save overwrites it.
                return Ok(LoadOutcome::with_warning(format!(
                    "catalog file {} is not valid JSON ({}); starting with an empty catalog",
                    self.path.display(),
                    err
                )));
            }
        };

        let mut outcome = LoadOutcome::empty();
        for (position, value) in raw.into_iter().enumerate() {
            match serde_json::from_value::<Book>(value) {
                Ok(book) => outcome.books.push(book),
                Err(err) => outcome.warnings.push(format!(
                    "skipping unreadable record #{} in {}: {}",
                    position + 1,
                    self.path.display(),
                    err
                )),
            }
        }
        Ok(outcome)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(books).map_err(ShelfError::Serialization)?;
        fs::write(&self.path, content).map_err(ShelfError::Io)?;
        Ok(())
    }
}
