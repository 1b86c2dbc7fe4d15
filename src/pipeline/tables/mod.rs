pub mod analyzer;
pub mod table;

pub use analyzer::*;
pub use table::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MalformedTableError {
    #[error("table fragment has {0} line(s), need at least a header and separator")]
    TooShort(usize),

    #[error("data row {row} has {found} field(s), header has {expected}")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}
