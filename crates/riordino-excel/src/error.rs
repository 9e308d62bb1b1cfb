//! Errors produced by the reorder pipeline.
//!
//! Every variant aborts the whole run; there is no partial output. Messages
//! are written for the person who has to fix the source file and are meant
//! to be shown verbatim.
use riordino_core::ColumnNotFound;

/// All the ways a reorder run can fail.
#[derive(Debug, thiserror::Error)]
pub enum ReorderError {
    /// No row among the first `scanned_rows` looks like a header row.
    #[error(
        "header row not found in the first {scanned_rows} rows: no row mentions both a \
         sold/venduta column and a stock/giacenza column; first non-empty rows:\n{}",
        .sample.join("\n")
    )]
    HeaderNotFound {
        /// How many rows were examined.
        scanned_rows: u32,
        /// Short rendering of the first non-empty rows seen.
        sample: Vec<String>,
    },

    /// A required column has no matching header.
    #[error("required column {field:?} not found; headers found: [{}]", .headers.join(", "))]
    ColumnNotFound {
        /// Human-readable name of the missing field.
        field: String,
        /// All header texts in the header row.
        headers: Vec<String>,
    },

    /// The input could not be opened or parsed as a workbook.
    #[error("cannot read workbook: {detail}")]
    WorkbookRead {
        /// Underlying error description.
        detail: String,
    },

    /// The filled workbook could not be serialized.
    #[error("cannot write workbook: {detail}")]
    WorkbookWrite {
        /// Underlying error description.
        detail: String,
    },
}

impl From<ColumnNotFound> for ReorderError {
    fn from(e: ColumnNotFound) -> Self {
        Self::ColumnNotFound {
            field: e.field.label().to_owned(),
            headers: e.headers,
        }
    }
}
