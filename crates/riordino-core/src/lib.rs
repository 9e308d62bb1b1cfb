//! Pure reorder logic for point-of-sale stock exports.
//!
//! This crate knows nothing about spreadsheets: it matches header texts to
//! semantic fields, turns sold/stock pairs into pack-rounded orders and
//! collects the result into a [`ReorderReport`]. Reading and writing `.xlsx`
//! files lives in `riordino-excel`.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod calculator;
pub mod columns;
pub mod coverage;
pub mod header;
pub mod normalize;
pub mod policy;
pub mod report;

pub use calculator::{ComputedRow, OrderAmount, SourceRow, compute_order, compute_rows, round_to_tenth};
pub use columns::{COLUMN_CANDIDATES, ColumnMap, ColumnNotFound, Field, resolve_columns};
pub use coverage::{CoverageWeeks, InvalidCoverageWeeks};
pub use header::{HEADER_SCAN_LIMIT, is_header_row};
pub use normalize::normalize_text;
pub use policy::{DEFAULT_PACK_SIZE, DEFAULT_UNIT_WEIGHT_KG, PolicyError, ReorderPolicy};
pub use report::{DEFAULT_PREVIEW_ROWS, ReorderLine, ReorderReport, materialize};
