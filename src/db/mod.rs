//! Persistence module split across logical submodules.

mod books;
mod connection;
mod error;

pub use books::{
    count_books, create_book, delete_book, fetch_all_books, search_books, update_book,
};
pub use connection::{ensure_schema, seed_books};
pub use error::StoreError;

#[cfg(test)]
pub(crate) use connection::apply_schema;
