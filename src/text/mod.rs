//! Small string helpers and plain-text table layout.
//!
//! Widths are measured in `char`s of each cell's `Display` rendering.
//!
//! # Examples
//!
//! ```rust
//! use utilkit::text::{format_table, max_column_length, Table};
//!
//! let table: Table<&str> = vec![
//!     vec!["id", "name"],
//!     vec!["1", "ferris"],
//! ];
//! assert_eq!(max_column_length(&table), vec![2, 6]);
//! assert_eq!(format_table(&table, " | "), "id | name\n1  | ferris");
//! ```

use std::borrow::Cow;
use std::fmt;

/// Rows of cells. Rows may have different lengths.
pub type Table<T> = Vec<Vec<T>>;

fn width<T: fmt::Display>(cell: &T) -> usize {
    cell.to_string().chars().count()
}

/// Returns the widest cell of each column.
///
/// The result has one entry per column of the longest row; columns missing
/// from shorter rows count as empty.
pub fn max_column_length<T: fmt::Display>(table: &Table<T>) -> Vec<usize> {
    let columns = table.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in table {
        for (column, cell) in row.iter().enumerate() {
            widths[column] = widths[column].max(width(cell));
        }
    }
    widths
}

/// Lays `table` out with left-aligned, padded columns.
///
/// Cells are joined by `separator` and rows by `\n`. The last cell of a row is
/// not padded, so no line carries trailing spaces.
pub fn format_table<T: fmt::Display>(table: &Table<T>, separator: &str) -> String {
    let widths = max_column_length(table);
    let mut output = String::new();
    for (index, row) in table.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        for (column, cell) in row.iter().enumerate() {
            if column > 0 {
                output.push_str(separator);
            }
            let rendered = cell.to_string();
            if column + 1 == row.len() {
                output.push_str(&rendered);
            } else {
                output.push_str(&format!("{rendered:<width$}", width = widths[column]));
            }
        }
    }
    output
}

/// Uppercases the first character of `text`.
///
/// # Examples
///
/// ```rust
/// use utilkit::text::capitalize;
///
/// assert_eq!(capitalize("hello world"), "Hello world");
/// assert_eq!(capitalize("ßtraße"), "SStraße");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Shortens `text` to at most `max_chars` characters, ending in `ellipsis`.
///
/// Text that already fits is borrowed unchanged. If `ellipsis` alone is longer
/// than `max_chars`, the ellipsis itself is cut.
///
/// # Examples
///
/// ```rust
/// use utilkit::text::truncate;
///
/// assert_eq!(truncate("hello world", 8, "..."), "hello...");
/// assert_eq!(truncate("short", 8, "..."), "short");
/// assert_eq!(truncate("hello", 2, "..."), "..");
/// ```
pub fn truncate<'a>(text: &'a str, max_chars: usize, ellipsis: &str) -> Cow<'a, str> {
    if text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    let ellipsis_chars = ellipsis.chars().count();
    if ellipsis_chars >= max_chars {
        return Cow::Owned(ellipsis.chars().take(max_chars).collect());
    }
    let kept: String = text.chars().take(max_chars - ellipsis_chars).collect();
    Cow::Owned(kept + ellipsis)
}
