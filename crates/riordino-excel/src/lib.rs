//! Spreadsheet boundary of the riordino reorder engine.
//!
//! This crate turns an uploaded `.xlsx` sales/stock export into a reorder
//! report and a filled copy of the same workbook. `calamine` (reading) and
//! `umya-spreadsheet` (write-back) are confined to this crate and do not
//! bleed into `riordino-core`.
//!
//! # Pipeline
//!
//! 1. Read the first worksheet and locate the header row by content within
//!    the first 30 rows.
//! 2. Resolve the six required columns from the header texts; fail before
//!    touching any data row if one is missing.
//! 3. Coerce every data row to a typed [`riordino_core::SourceRow`] and
//!    compute its order.
//! 4. Write the orders back into a copy of the original workbook.
//! 5. Collect the non-blank rows into a [`ReorderReport`].
//!
//! Each call is independent: nothing is cached between calls.
use std::time::Instant;

use riordino_core::{
    ColumnMap, CoverageWeeks, ReorderPolicy, ReorderReport, compute_rows, materialize,
    resolve_columns,
};
use tracing::info;

pub mod error;
pub mod reader;
pub mod sheet;
pub mod writer;

pub use error::ReorderError;
pub use reader::HeaderRow;

/// Result of a successful reorder run.
#[derive(Debug, Clone)]
pub struct ReorderOutput {
    /// The original workbook with the order columns filled in.
    pub workbook: Vec<u8>,
    /// The non-blank lines, in spreadsheet order.
    pub report: ReorderReport,
}

/// Header and column binding of a workbook, without computing anything.
#[derive(Debug, Clone)]
pub struct WorkbookLayout {
    /// Name of the first worksheet.
    pub sheet_name: String,
    /// The detected header row.
    pub header: HeaderRow,
    /// Column bound to each field.
    pub columns: ColumnMap,
    /// Number of rows below the header.
    pub data_rows: usize,
}

/// Runs the full reorder pipeline over `bytes`.
///
/// # Errors
///
/// Returns [`ReorderError`] when the workbook cannot be read, the header row
/// or a required column cannot be found, or the filled workbook cannot be
/// serialized. No partial output is produced.
pub fn compute_reorder(
    bytes: &[u8],
    weeks: CoverageWeeks,
    policy: &ReorderPolicy,
) -> Result<ReorderOutput, ReorderError> {
    let started = Instant::now();

    let sheet = reader::open_first_sheet(bytes)?;
    let header = reader::locate_header(&sheet.rows)?;
    let columns = resolve_columns(&header.labels)?;

    let source = reader::extract_rows(&sheet.rows, &header, &columns);
    let computed = compute_rows(source, weeks, policy);

    let workbook = writer::write_back(bytes, &header, &columns, &computed)?;
    let report = materialize(&computed, weeks, header.number);

    info!(
        sheet = %sheet.name,
        header_row = header.number,
        weeks = weeks.get(),
        lines = report.lines.len(),
        to_order = report.lines_to_order(),
        elapsed_ms = started.elapsed().as_millis(),
        "reorder computed"
    );

    Ok(ReorderOutput { workbook, report })
}

/// Locates the header row and binds the columns of `bytes`, for diagnosing
/// new export layouts.
///
/// # Errors
///
/// Same read, header and column errors as [`compute_reorder`].
pub fn inspect_workbook(bytes: &[u8]) -> Result<WorkbookLayout, ReorderError> {
    let sheet = reader::open_first_sheet(bytes)?;
    let header = reader::locate_header(&sheet.rows)?;
    let columns = resolve_columns(&header.labels)?;
    let data_rows = sheet
        .rows
        .iter()
        .filter(|r| r.number > header.number)
        .count();

    Ok(WorkbookLayout {
        sheet_name: sheet.name,
        header,
        columns,
        data_rows,
    })
}
