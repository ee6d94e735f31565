//! Binary entry point that glues the SQLite-backed inventory to the console
//! menu: bring up the database, seed the sample books on a fresh store, and
//! drive the menu loop until the user exits.
use std::io;

use bookstore_manager::{ensure_schema, seed_books, App};

/// Initialize persistence, seed a fresh store, and launch the menu loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for example
/// an unwritable home directory) to the terminal instead of crashing
/// silently.
fn main() -> anyhow::Result<()> {
    let conn = ensure_schema()?;
    seed_books(&conn)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(conn, stdin.lock(), stdout.lock());
    app.run()
}
