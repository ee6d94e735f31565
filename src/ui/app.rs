use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use rusqlite::Connection;

use crate::db::{
    create_book, delete_book, fetch_all_books, search_books, update_book, StoreError,
};

use super::prompt::{read_i64_once, read_i64_retrying, read_line};
use super::table::render_books_table;

/// Menu text printed at the top of every iteration. Kept as one literal so
/// the loop body stays focused on dispatch.
const MENU: &str = "\nWelcome to the ebookstore database!\n\
Please select an option from the menu below:\n\
1. Enter book\n\
2. Update book\n\
3. Delete book\n\
4. Search books\n\
5. Display books\n\
0. Exit";

/// Interactive application state: the open store plus the console handles.
/// Input and output are generics so tests can drive a whole session through
/// an in-memory script and inspect the transcript.
pub struct App<R, W> {
    conn: Connection,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(conn: Connection, input: R, output: W) -> Self {
        Self {
            conn,
            input,
            output,
        }
    }

    /// Show the inventory once, then run the menu loop until the user picks
    /// exit. Only a broken console or a structural read failure unwinds out
    /// of here; operation-level problems are printed and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        self.display_books()?;

        loop {
            writeln!(self.output, "{MENU}").context("failed to print menu")?;
            let choice = read_line(&mut self.input, &mut self.output, "Enter your choice: ")?;

            match choice.trim().parse::<i64>() {
                Ok(1) => self.add_book()?,
                Ok(2) => self.update_book()?,
                Ok(3) => self.delete_book()?,
                Ok(4) => self.search_books()?,
                Ok(5) => self.display_books()?,
                Ok(0) => {
                    writeln!(self.output, "Goodbye!").context("failed to print farewell")?;
                    return Ok(());
                }
                _ => writeln!(
                    self.output,
                    "{}",
                    "Invalid choice. Please enter a number from 0 to 5.".red()
                )
                .context("failed to print invalid choice")?,
            }
        }
    }

    /// Prompt for a new book and insert it. A malformed quantity restarts the
    /// whole entry; a store failure is reported and abandons the flow.
    fn add_book(&mut self) -> Result<()> {
        loop {
            let title = read_line(
                &mut self.input,
                &mut self.output,
                "Enter the title of the book: ",
            )?;
            let author = read_line(
                &mut self.input,
                &mut self.output,
                "Enter the name of the author: ",
            )?;
            let Some(qty) = read_i64_once(
                &mut self.input,
                &mut self.output,
                "Enter the quantity of books: ",
            )?
            else {
                writeln!(
                    self.output,
                    "{}",
                    "Invalid input for quantity. Please enter a valid integer value.".red()
                )
                .context("failed to print quantity error")?;
                continue;
            };

            match create_book(&self.conn, &title, &author, qty) {
                Ok(_) => {
                    writeln!(self.output, "{}", "Book added successfully.".green())
                        .context("failed to print confirmation")?;
                }
                Err(err) => {
                    writeln!(self.output, "{}", format!("Error: {err}").red())
                        .context("failed to print store error")?;
                }
            }
            return Ok(());
        }
    }

    /// Single-attempt update: any malformed number aborts back to the menu,
    /// and a missing id is reported as not found rather than claimed as a
    /// success.
    fn update_book(&mut self) -> Result<()> {
        let id = read_i64_once(
            &mut self.input,
            &mut self.output,
            "Enter the id of the book you want to update: ",
        )?;
        let Some(id) = id else {
            return self.print_update_input_error();
        };

        let title = read_line(
            &mut self.input,
            &mut self.output,
            "Enter the new title of the book: ",
        )?;
        let author = read_line(
            &mut self.input,
            &mut self.output,
            "Enter the new name of the author: ",
        )?;
        let qty = read_i64_once(
            &mut self.input,
            &mut self.output,
            "Enter the new quantity of books: ",
        )?;
        let Some(qty) = qty else {
            return self.print_update_input_error();
        };

        match update_book(&self.conn, id, &title, &author, qty) {
            Ok(()) => writeln!(self.output, "{}", "Book updated successfully.".green())
                .context("failed to print confirmation")?,
            Err(err) => self.report_store_error(err, "An error occurred")?,
        }
        Ok(())
    }

    fn print_update_input_error(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "{}",
            "Invalid input. Please enter a valid number for the book id and quantity.".red()
        )
        .context("failed to print update input error")
    }

    /// Delete by id, re-prompting until the id at least parses. A miss is a
    /// soft outcome, not an error dump.
    fn delete_book(&mut self) -> Result<()> {
        let id = read_i64_retrying(
            &mut self.input,
            &mut self.output,
            "Enter the id of the book you want to delete: ",
            "Invalid input for book id. Please enter a valid integer value.",
        )?;

        match delete_book(&self.conn, id) {
            Ok(()) => writeln!(self.output, "{}", "Book deleted successfully.".green())
                .context("failed to print confirmation")?,
            Err(err) => self.report_store_error(err, "Error")?,
        }
        Ok(())
    }

    /// Substring search over titles and authors, printing one summary line
    /// per hit.
    fn search_books(&mut self) -> Result<()> {
        let term = read_line(
            &mut self.input,
            &mut self.output,
            "Enter the title or author of the book you want to search for: ",
        )?;

        match search_books(&self.conn, &term) {
            Ok(books) if books.is_empty() => {
                writeln!(self.output, "No books found.").context("failed to print empty result")?;
            }
            Ok(books) => {
                for book in books {
                    writeln!(self.output, "{}", book.summary())
                        .context("failed to print search result")?;
                }
            }
            Err(err) => self.report_store_error(err, "An error occurred")?,
        }
        Ok(())
    }

    /// Print the whole inventory as a boxed grid. A read-all is not expected
    /// to fail in normal operation, so store errors propagate instead of
    /// being swallowed here.
    fn display_books(&mut self) -> Result<()> {
        let books = fetch_all_books(&self.conn)?;
        write!(self.output, "{}", render_books_table(&books))
            .context("failed to print book table")?;
        Ok(())
    }

    /// Not-found misses print their own friendly message; anything else gets
    /// the flow's error prefix in red.
    fn report_store_error(&mut self, err: anyhow::Error, prefix: &str) -> Result<()> {
        if matches!(err.downcast_ref::<StoreError>(), Some(StoreError::NotFound(_))) {
            writeln!(self.output, "{err}").context("failed to print miss")?;
        } else {
            writeln!(self.output, "{}", format!("{prefix}: {err}").red())
                .context("failed to print store error")?;
        }
        Ok(())
    }
}
