use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rusqlite::{params, Connection};

use super::books::count_books;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".bookstore-manager";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "books.sqlite";

/// The sample inventory inserted into a brand-new store. Kept as one literal
/// table so tests and the seeding step agree on exactly what a fresh run
/// looks like.
pub(crate) const SEED_BOOKS: &[(&str, &str, i64)] = &[
    ("A Tale of Two Cities", "Charles Dickens", 30),
    ("The Lion, the Witch and the Wardrobe", "C. S. Lewis", 25),
    ("The Lord of the Rings", "J.R.R Tolkien", 37),
    ("Alice in Wonderland", "Lewis Carroll", 12),
    ("Adventures of Sherlock Holmes", "Sir Arthur Conan Doyle", 5),
    ("To Kill a Mockingbird", "Harper Lee", 54),
    ("1984", "George Orwell", 22),
    ("Pride and Prejudice", "Jane Austen", 22),
    ("The Bell Jar", "Sylvia Plath", 47),
    ("Wuthering Heights", "Emily Brontë", 27),
];

/// Ensure the database file exists, create the `books` table when absent, and
/// return a live connection. Schema creation is idempotent so repeated runs
/// against the same file are safe.
pub fn ensure_schema() -> Result<Connection> {
    let db_path = db_path()?;

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let conn = Connection::open(&db_path).context("failed to open SQLite database")?;
    apply_schema(&conn)?;
    Ok(conn)
}

/// Shared schema statement, split out so in-memory test connections go
/// through exactly the same DDL as the on-disk store.
pub(crate) fn apply_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            Title TEXT NOT NULL,
            Author TEXT NOT NULL,
            Qty INTEGER NOT NULL
        )",
        [],
    )
    .context("failed to create books table")?;
    Ok(())
}

/// Populate a fresh store with the ten sample books. Seeding is gated on the
/// table being empty so rerunning the program never duplicates the samples;
/// a store the user has emptied on purpose will be re-seeded, which matches
/// "sample data appears whenever there is nothing else to show".
pub fn seed_books(conn: &Connection) -> Result<()> {
    if count_books(conn)? > 0 {
        return Ok(());
    }

    for (title, author, qty) in SEED_BOOKS {
        conn.execute(
            "INSERT INTO books (Title, Author, Qty) VALUES (?1, ?2, ?3)",
            params![title, author, qty],
        )
        .with_context(|| format!("failed to seed book '{title}'"))?;
    }
    Ok(())
}

/// Resolve the absolute path to the SQLite database inside the user's home.
fn db_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}
