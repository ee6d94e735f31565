//! Domain model that mirrors the SQLite schema and gets passed between the
//! persistence layer and the console surface. The intent is that the type
//! stays a light-weight data holder so the other layers can focus on queries
//! and presentation logic.

#[derive(Debug, Clone, PartialEq, Eq)]
/// In-memory representation of one row in the `books` table.
pub struct Book {
    /// Primary key from the SQLite store. Assigned on insert, immutable
    /// afterwards, and never reused once the row is deleted.
    pub id: i64,
    /// Title shown in listings and matched by the substring search.
    pub title: String,
    /// Author name, also matched by the substring search.
    pub author: String,
    /// Stock count. The store does not reject negative values; callers that
    /// care about sign must validate before inserting.
    pub qty: i64,
}

impl Book {
    /// Compose the `id: _, title: _, author: _, qty: _` line used by the
    /// search results listing.
    pub fn summary(&self) -> String {
        format!(
            "id: {}, title: {}, author: {}, qty: {}",
            self.id, self.title, self.author, self.qty
        )
    }
}
