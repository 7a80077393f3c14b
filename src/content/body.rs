//! Parsers for the structured body encodings.
//!
//! A `table` body is pipe-and-newline delimited; a `list` body is comma
//! delimited. Both parsers are total: any input string produces a value.

use serde::Serialize;

/// Parsed pipe-and-newline table body.
///
/// Rows are not normalized: a data row may be shorter or longer than the
/// header row, and renderers must not assume uniform width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableBody {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableBody {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Widest row length across header and data rows.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain([self.headers.len()])
            .max()
            .unwrap_or(0)
    }
}

/// Split one table line into trimmed cells.
///
/// Zero-length segments between pipes are dropped; a whitespace-only segment
/// survives as an empty cell.
fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.trim().to_string())
        .collect()
}

/// Parse a table body.
///
/// The body splits on newline with zero-length lines dropped, so the header
/// row is the first non-empty line; every remaining line is a data row.
///
/// # Examples
///
/// ```
/// use guidebook_engine::content::body::parse_table_body;
///
/// let table = parse_table_body("A | B\n1 | 2\n3 | 4");
/// assert_eq!(table.headers(), ["A", "B"]);
/// assert_eq!(table.rows(), [vec!["1", "2"], vec!["3", "4"]]);
/// ```
pub fn parse_table_body(body: &str) -> TableBody {
    let mut lines = body.split('\n').filter(|line| !line.is_empty());
    let headers = match lines.next() {
        Some(line) => split_cells(line),
        None => Vec::new(),
    };
    let rows = lines.map(split_cells).collect();
    TableBody { headers, rows }
}

/// Parse a comma-delimited list body.
///
/// A naive split: every comma delimits an entry and each entry is trimmed,
/// so empty entries between commas — and an empty trailing entry after a
/// final comma — are preserved. An empty body yields no entries.
///
/// # Examples
///
/// ```
/// use guidebook_engine::content::body::parse_list_body;
///
/// assert_eq!(parse_list_body("a, b ,c"), ["a", "b", "c"]);
/// ```
pub fn parse_list_body(body: &str) -> Vec<String> {
    if body.is_empty() {
        return Vec::new();
    }
    body.split(',').map(|entry| entry.trim().to_string()).collect()
}
