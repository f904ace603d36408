//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic book catalog library**. The CLI binary is a thin
//! client over it; nothing inside the library knows about terminals, stdout,
//! or exit codes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (args.rs + print.rs, wired by main.rs)                 │
//! │  - Parses arguments, formats output                         │
//! │  - The ONLY place that prints or exits                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (library.rs)                                       │
//! │  - Owns the in-memory book collection                       │
//! │  - Every mutation re-persists the whole collection          │
//! │  - Returns structured results (Book / Option<Book> / &[])   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - Abstract BookStore trait                                 │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From [`library::Library`] inward, code takes plain Rust arguments and
//! returns plain Rust types. Diagnostics that the user should see (a corrupt
//! catalog file, a skipped record) travel back as warning strings on
//! [`store::LoadOutcome`], never as prints. The same core could serve a TUI
//! or a web handler unchanged.
//!
//! ## Persistence Model
//!
//! The whole catalog is one JSON array in one file, rewritten after every
//! mutation. There is no locking and no write-ahead anything: the tool is
//! single-user by design, and two processes sharing a catalog file will
//! last-writer-win. What IS guaranteed: after any successful mutating call,
//! the file and the in-memory collection agree exactly. A failed write rolls
//! the in-memory change back, so the invariant survives save errors too.
//!
//! ## Module Overview
//!
//! - [`library`]: The `Library` aggregate — entry point for all operations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Book`, `BookStatus`, `SearchField`)
//! - [`error`]: Error types

pub mod error;
pub mod library;
pub mod model;
pub mod store;
