use super::analyzer::{split_fields, TableFragment};
use super::MalformedTableError;

/// Column-oriented container for one materialized table.
///
/// Cell text is kept verbatim (surrounding whitespace trimmed, nothing
/// coerced — "75%" stays "75%"); interpretation belongs to the caller.
/// Two tables are equal when their column names, column order and cells
/// all match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredTable {
    columns: Vec<String>,
    // Column-major: values[c][r] is row r of column c.
    values: Vec<Vec<String>>,
}

impl StructuredTable {
    /// Materialize a raw fragment: first line names the columns, second
    /// line is the separator (discarded), the rest are data rows.
    pub fn from_fragment(fragment: &TableFragment) -> Result<Self, MalformedTableError> {
        let lines: Vec<&str> = fragment.lines().collect();
        if lines.len() < 2 {
            return Err(MalformedTableError::TooShort(lines.len()));
        }

        let columns: Vec<String> = split_fields(lines[0])
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut values = vec![Vec::new(); columns.len()];
        for (row, line) in lines[2..].iter().enumerate() {
            let cells = split_fields(line);
            if cells.len() != columns.len() {
                return Err(MalformedTableError::ColumnCountMismatch {
                    row,
                    expected: columns.len(),
                    found: cells.len(),
                });
            }
            for (column, cell) in values.iter_mut().zip(cells) {
                column.push(cell.to_string());
            }
        }

        Ok(Self { columns, values })
    }

    /// Column names in header order. Duplicates are preserved.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Cells of the named column, in row order. With duplicate column
    /// names the last occurrence wins.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .rposition(|c| c == name)
            .map(|i| self.values[i].as_slice())
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// Re-serialize header and rows with the original delimiter. The
    /// result reproduces the source cell text modulo surrounding
    /// whitespace.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.columns.join("|"));
        out.push('\n');
        out.push_str(&vec!["---"; self.columns.len()].join("|"));
        for row in 0..self.num_rows() {
            out.push('\n');
            let cells: Vec<&str> = self.values.iter().map(|c| c[row].as_str()).collect();
            out.push_str(&cells.join("|"));
        }
        out
    }
}
