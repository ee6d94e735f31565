use thiserror::Error;

/// Outcomes the persistence layer wants callers to tell apart from hard
/// SQLite failures. Update and delete report a miss through `NotFound` so the
/// console surface can print a friendly line instead of an error dump.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Book with id {0} not found.")]
    NotFound(i64),
}
