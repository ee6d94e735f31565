use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::models::Book;

use super::error::StoreError;

/// Retrieve every book in natural id order. The query doubles as the single
/// source of truth for how the display table is ordered.
pub fn fetch_all_books(conn: &Connection) -> Result<Vec<Book>> {
    let mut stmt = conn
        .prepare("SELECT id, Title, Author, Qty FROM books ORDER BY id")
        .context("failed to prepare book listing query")?;

    let books = stmt
        .query_map([], |row| {
            Ok(Book {
                id: row.get(0)?,
                title: row.get(1)?,
                author: row.get(2)?,
                qty: row.get(3)?,
            })
        })
        .context("failed to iterate books")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect books")?;

    Ok(books)
}

/// Total number of rows in the store. Used to gate seeding and handy for
/// asserting row-count invariants in tests.
pub fn count_books(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
        .context("failed to count books")
}

/// Insert a new book row, returning the hydrated struct so the caller can
/// report the assigned id without re-querying.
pub fn create_book(conn: &Connection, title: &str, author: &str, qty: i64) -> Result<Book> {
    conn.execute(
        "INSERT INTO books (Title, Author, Qty) VALUES (?1, ?2, ?3)",
        params![title, author, qty],
    )
    .context("failed to insert book")?;

    let id = conn.last_insert_rowid();
    Ok(Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        qty,
    })
}

/// Overwrite every editable field of an existing book. A zero-row update is
/// surfaced as `StoreError::NotFound` so the console can show a friendly
/// message instead of claiming success for a row that does not exist.
pub fn update_book(conn: &Connection, id: i64, title: &str, author: &str, qty: i64) -> Result<()> {
    let updated = conn
        .execute(
            "UPDATE books SET Title = ?1, Author = ?2, Qty = ?3 WHERE id = ?4",
            params![title, author, qty, id],
        )
        .context("failed to update book")?;

    if updated == 0 {
        Err(StoreError::NotFound(id).into())
    } else {
        Ok(())
    }
}

/// Remove a book row. Like update, a miss comes back as
/// `StoreError::NotFound` rather than silent success.
pub fn delete_book(conn: &Connection, id: i64) -> Result<()> {
    let deleted = conn
        .execute("DELETE FROM books WHERE id = ?1", params![id])
        .context("failed to delete book")?;

    if deleted == 0 {
        Err(StoreError::NotFound(id).into())
    } else {
        Ok(())
    }
}

/// Find every book whose title or author contains the term as a substring.
/// The term is wildcard-wrapped on both sides, so matching follows SQLite's
/// `LIKE` semantics (case-insensitive for ASCII).
pub fn search_books(conn: &Connection, term: &str) -> Result<Vec<Book>> {
    let pattern = format!("%{term}%");
    let mut stmt = conn
        .prepare(
            "SELECT id, Title, Author, Qty FROM books
             WHERE Title LIKE ?1 OR Author LIKE ?1
             ORDER BY id",
        )
        .context("failed to prepare search query")?;

    let books = stmt
        .query_map([&pattern], |row| {
            Ok(Book {
                id: row.get(0)?,
                title: row.get(1)?,
                author: row.get(2)?,
                qty: row.get(3)?,
            })
        })
        .context("failed to iterate search results")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect search results")?;

    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::{apply_schema, seed_books};

    fn memory_store() -> Connection {
        let conn = Connection::open_in_memory().expect("in-memory store");
        apply_schema(&conn).expect("schema");
        conn
    }

    fn seeded_store() -> Connection {
        let conn = memory_store();
        seed_books(&conn).expect("seed");
        conn
    }

    #[test]
    fn create_assigns_an_id_and_grows_the_store_by_one() {
        let conn = seeded_store();
        let before = count_books(&conn).unwrap();

        let book = create_book(&conn, "Dune", "Frank Herbert", 15).unwrap();

        assert!(book.id > 0);
        assert_eq!(count_books(&conn).unwrap(), before + 1);

        let found = search_books(&conn, "Dune").unwrap();
        assert_eq!(found, vec![book]);
    }

    #[test]
    fn update_rewrites_exactly_one_row() {
        let conn = seeded_store();
        let target = fetch_all_books(&conn).unwrap()[0].clone();

        update_book(&conn, target.id, "New Title", "New Author", 3).unwrap();

        let books = fetch_all_books(&conn).unwrap();
        assert_eq!(books.len(), 10);
        let updated = books.iter().find(|b| b.id == target.id).unwrap();
        assert_eq!(updated.title, "New Title");
        assert_eq!(updated.author, "New Author");
        assert_eq!(updated.qty, 3);
        assert!(books
            .iter()
            .filter(|b| b.id != target.id)
            .all(|b| b.title != "New Title"));
    }

    #[test]
    fn update_of_a_missing_id_reports_not_found() {
        let conn = seeded_store();
        let err = update_book(&conn, 9999, "X", "Y", 1).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::NotFound(9999))
        ));
    }

    #[test]
    fn delete_removes_the_row_and_retires_its_id() {
        let conn = seeded_store();
        let target = fetch_all_books(&conn).unwrap()[3].clone();

        delete_book(&conn, target.id).unwrap();

        assert_eq!(count_books(&conn).unwrap(), 9);
        assert!(fetch_all_books(&conn)
            .unwrap()
            .iter()
            .all(|b| b.id != target.id));

        // AUTOINCREMENT keeps retired ids out of circulation.
        let replacement = create_book(&conn, "Dune", "Frank Herbert", 15).unwrap();
        assert_ne!(replacement.id, target.id);
    }

    #[test]
    fn delete_of_a_missing_id_leaves_the_store_unchanged() {
        let conn = seeded_store();
        let err = delete_book(&conn, 4242).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::NotFound(4242))
        ));
        assert_eq!(count_books(&conn).unwrap(), 10);
    }

    #[test]
    fn search_matches_titles_and_authors_as_substrings() {
        let conn = seeded_store();

        let by_title = search_books(&conn, "Mockingbird").unwrap();
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].author, "Harper Lee");

        let by_author = search_books(&conn, "Orwell").unwrap();
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].title, "1984");

        // "the" appears in several seed titles.
        assert!(search_books(&conn, "the").unwrap().len() > 1);

        assert!(search_books(&conn, "Zarathustra").unwrap().is_empty());
    }

    #[test]
    fn end_to_end_add_search_delete_round_trip() {
        let conn = seeded_store();
        assert_eq!(count_books(&conn).unwrap(), 10);

        let dune = create_book(&conn, "Dune", "Frank Herbert", 15).unwrap();
        assert_eq!(count_books(&conn).unwrap(), 11);

        let hits = search_books(&conn, "Dune").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, dune.id);

        delete_book(&conn, dune.id).unwrap();
        assert_eq!(count_books(&conn).unwrap(), 10);
        assert!(search_books(&conn, "Dune").unwrap().is_empty());
    }

    #[test]
    fn negative_quantities_are_stored_verbatim() {
        let conn = memory_store();
        let book = create_book(&conn, "Ledger", "Anon", -4).unwrap();
        assert_eq!(book.qty, -4);
        assert_eq!(fetch_all_books(&conn).unwrap()[0].qty, -4);
    }
}
