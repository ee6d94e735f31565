//! Core library surface for the bookstore inventory manager.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as potential external tooling can reuse the same
//! pieces: the SQLite persistence helpers, the `Book` model, and the
//! interactive menu application.
pub mod db;
pub mod models;
pub mod ui;

/// Convenience re-exports for the persistence layer. These functions are
/// typically used by `main.rs` to initialize the embedded SQLite store and
/// preload the sample inventory.
pub use db::{ensure_schema, seed_books};

/// The sole domain type other layers manipulate.
pub use models::Book;

/// The interactive application entry point and state container.
pub use ui::App;
