//! Spreadsheet writer: fills the order columns of the original workbook.
//!
//! The write pass re-opens the caller's original bytes, so every sheet, cell,
//! style and formula outside the two output columns and the relabelled
//! header cells is carried over untouched.
use std::collections::HashMap;
use std::io::Cursor;

use riordino_core::{ColumnMap, ComputedRow, Field, OrderAmount};
use tracing::debug;

use crate::error::ReorderError;
use crate::reader::HeaderRow;

/// Header cells relabelled after the data pass.
const RELABELLED_FIELDS: [Field; 4] = [
    Field::QuantitySold,
    Field::CurrentStock,
    Field::OrderQuantity,
    Field::OrderWeightKg,
];

/// Writes order quantity and weight into every row below the header of the
/// first worksheet and returns the re-serialized workbook.
///
/// Rows without a computed order (beyond the last row calamine reported, or
/// otherwise absent from `computed`) receive zeros, so the output columns are
/// populated all the way down to the sheet's last row.
///
/// # Errors
///
/// Returns [`ReorderError::WorkbookRead`] if `original` cannot be re-opened
/// and [`ReorderError::WorkbookWrite`] if serialization fails.
pub fn write_back(
    original: &[u8],
    header: &HeaderRow,
    columns: &ColumnMap,
    computed: &[ComputedRow],
) -> Result<Vec<u8>, ReorderError> {
    let mut book = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(original), true)
        .map_err(|e| ReorderError::WorkbookRead {
            detail: format!("re-opening workbook for write-back: {e}"),
        })?;

    let sheet = book
        .get_sheet_mut(&0)
        .ok_or_else(|| ReorderError::WorkbookRead {
            detail: "workbook contains no worksheets".to_owned(),
        })?;

    let by_row: HashMap<u32, OrderAmount> = computed
        .iter()
        .map(|c| (c.source.row_number, c.amount))
        .collect();

    let qty_col = column_number(columns.get(Field::OrderQuantity))?;
    let weight_col = column_number(columns.get(Field::OrderWeightKg))?;
    let last_row = sheet.get_highest_row();

    for row in (header.number + 1)..=last_row {
        let amount = by_row.get(&row).copied().unwrap_or_default();
        sheet
            .get_cell_mut((qty_col, row))
            .set_value_number(amount.order_quantity as f64);
        sheet
            .get_cell_mut((weight_col, row))
            .set_value_number(amount.weight_kg);
    }

    for field in RELABELLED_FIELDS {
        if let Some(label) = field.canonical_header() {
            let col = column_number(columns.get(field))?;
            sheet
                .get_cell_mut((col, header.number))
                .set_value_string(label);
        }
    }

    debug!(
        header_row = header.number,
        last_row,
        computed = computed.len(),
        "order columns written"
    );

    let mut out = Vec::new();
    umya_spreadsheet::writer::xlsx::write_writer(&book, Cursor::new(&mut out)).map_err(|e| {
        ReorderError::WorkbookWrite {
            detail: e.to_string(),
        }
    })?;
    Ok(out)
}

/// Converts a zero-based column index to umya's 1-based column number.
fn column_number(col_idx: usize) -> Result<u32, ReorderError> {
    u32::try_from(col_idx + 1).map_err(|_| ReorderError::WorkbookWrite {
        detail: format!("column index {col_idx} is out of range"),
    })
}
