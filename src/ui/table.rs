use crate::models::Book;

/// Column headers for the inventory listing, in display order.
const HEADERS: [&str; 4] = ["id", "Title", "Author", "Qty"];

/// Render the full inventory as a boxed grid with Unicode rules: a double
/// line around the header, single-line separators between rows. Column
/// widths grow to the widest cell so the table stays aligned regardless of
/// how long titles get.
pub(crate) fn render_books_table(books: &[Book]) -> String {
    let rows: Vec<[String; 4]> = books
        .iter()
        .map(|b| {
            [
                b.id.to_string(),
                b.title.clone(),
                b.author.clone(),
                b.qty.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&rule(&widths, '╒', '═', '╤', '╕'));
    out.push_str(&grid_row(&widths, &HEADERS.map(String::from)));
    out.push_str(&rule(&widths, '╞', '═', '╪', '╡'));
    for (idx, row) in rows.iter().enumerate() {
        if idx > 0 {
            out.push_str(&rule(&widths, '├', '─', '┼', '┤'));
        }
        out.push_str(&grid_row(&widths, row));
    }
    out.push_str(&rule(&widths, '╘', '═', '╧', '╛'));
    out
}

/// One horizontal rule: a left corner, filled segments joined by a tee, and a
/// right corner. Segment width includes the one-space padding on each side of
/// a cell.
fn rule(widths: &[usize; 4], left: char, fill: char, tee: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (idx, width) in widths.iter().enumerate() {
        if idx > 0 {
            line.push(tee);
        }
        line.extend(std::iter::repeat(fill).take(width + 2));
    }
    line.push(right);
    line.push('\n');
    line
}

/// One content row, each cell left-aligned and padded to its column width.
fn grid_row(widths: &[usize; 4], cells: &[String; 4]) -> String {
    let mut line = String::new();
    line.push('│');
    for (width, cell) in widths.iter().zip(cells.iter()) {
        let padding = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.extend(std::iter::repeat(' ').take(padding + 1));
        line.push('│');
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str, author: &str, qty: i64) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            qty,
        }
    }

    #[test]
    fn empty_store_still_renders_the_header_box() {
        let table = render_books_table(&[]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("id") && lines[1].contains("Qty"));
        assert!(lines[0].starts_with('╒') && lines[0].ends_with('╕'));
        assert!(lines[3].starts_with('╘') && lines[3].ends_with('╛'));
    }

    #[test]
    fn every_line_of_the_grid_is_equally_wide() {
        let books = [
            book(1, "A Tale of Two Cities", "Charles Dickens", 30),
            book(2, "1984", "George Orwell", 22),
        ];
        let table = render_books_table(&books);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn rows_are_separated_by_single_rules() {
        let books = [
            book(1, "The Bell Jar", "Sylvia Plath", 47),
            book(2, "Wuthering Heights", "Emily Brontë", 27),
        ];
        let table = render_books_table(&books);
        let lines: Vec<&str> = table.lines().collect();
        // box top, header, header rule, row, row rule, row, box bottom
        assert_eq!(lines.len(), 7);
        assert!(lines[4].starts_with('├'));
        assert!(lines[3].contains("The Bell Jar"));
        assert!(lines[5].contains("Wuthering Heights"));
    }

    #[test]
    fn multibyte_titles_do_not_skew_alignment() {
        let books = [
            book(1, "Wuthering Heights", "Emily Brontë", 27),
            book(2, "1984", "George Orwell", 22),
        ];
        let table = render_books_table(&books);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
