//! Spreadsheet reader: opens the first worksheet, finds the header row and
//! extracts typed source rows.
use std::io::Cursor;

use calamine::{Reader, Xlsx, open_workbook_from_rs};
use riordino_core::{ColumnMap, Field, HEADER_SCAN_LIMIT, SourceRow, is_header_row};
use tracing::debug;

use crate::error::ReorderError;
use crate::sheet::{SheetRow, cell_number, cell_text, sheet_rows};

/// Maximum number of rows echoed in a [`ReorderError::HeaderNotFound`].
const HEADER_SAMPLE_ROWS: usize = 10;

/// Maximum length of one sampled row in a diagnostic.
const HEADER_SAMPLE_WIDTH: usize = 120;

/// The first worksheet of a workbook, flattened into rows.
#[derive(Debug, Clone)]
pub struct SourceSheet {
    /// Worksheet name.
    pub name: String,
    /// Rows with absolute numbering.
    pub rows: Vec<SheetRow>,
}

/// The detected header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRow {
    /// 1-based row number.
    pub number: u32,
    /// Raw text of every header cell, column A first, up to the last
    /// non-empty one.
    pub labels: Vec<String>,
}

/// Opens `bytes` as an `.xlsx` workbook and reads its first worksheet.
///
/// # Errors
///
/// Returns [`ReorderError::WorkbookRead`] if the bytes are not a readable
/// workbook or it has no worksheet.
pub fn open_first_sheet(bytes: &[u8]) -> Result<SourceSheet, ReorderError> {
    let mut workbook: Xlsx<_> =
        open_workbook_from_rs(Cursor::new(bytes)).map_err(|e: calamine::XlsxError| {
            ReorderError::WorkbookRead {
                detail: e.to_string(),
            }
        })?;

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ReorderError::WorkbookRead {
            detail: "workbook contains no worksheets".to_owned(),
        })?;

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| ReorderError::WorkbookRead {
            detail: format!("failed to read sheet {name:?}: {e}"),
        })?;

    let rows = sheet_rows(&range);
    debug!(sheet = %name, rows = rows.len(), "loaded first worksheet");
    Ok(SourceSheet { name, rows })
}

/// Finds the header row among rows 1 through [`HEADER_SCAN_LIMIT`].
///
/// # Errors
///
/// Returns [`ReorderError::HeaderNotFound`] with a sample of the first
/// non-empty rows when no row qualifies.
pub fn locate_header(rows: &[SheetRow]) -> Result<HeaderRow, ReorderError> {
    let mut sample = Vec::new();

    for row in rows.iter().take_while(|r| r.number <= HEADER_SCAN_LIMIT) {
        let mut texts = row.texts();
        if is_header_row(&texts) {
            debug!(row = row.number, "header row detected");
            let width = texts.iter().rposition(|t| !t.is_empty()).map_or(0, |i| i + 1);
            texts.truncate(width);
            return Ok(HeaderRow {
                number: row.number,
                labels: texts,
            });
        }
        if sample.len() < HEADER_SAMPLE_ROWS && !row.is_empty() {
            sample.push(describe_row(row.number, &texts));
        }
    }

    let last_row = rows.last().map_or(0, |r| r.number);
    Err(ReorderError::HeaderNotFound {
        scanned_rows: last_row.min(HEADER_SCAN_LIMIT),
        sample,
    })
}

/// Extracts one [`SourceRow`] for every row below the header.
pub fn extract_rows(rows: &[SheetRow], header: &HeaderRow, columns: &ColumnMap) -> Vec<SourceRow> {
    rows.iter()
        .filter(|r| r.number > header.number)
        .map(|r| SourceRow {
            row_number: r.number,
            item_code: cell_text(r.cell(columns.get(Field::ItemCode))),
            description: cell_text(r.cell(columns.get(Field::Description))),
            quantity_sold: cell_number(r.cell(columns.get(Field::QuantitySold))),
            current_stock: cell_number(r.cell(columns.get(Field::CurrentStock))),
        })
        .collect()
}

fn describe_row(number: u32, texts: &[String]) -> String {
    let joined = texts
        .iter()
        .filter(|t| !t.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" | ");
    let mut line = format!("row {number}: {joined}");
    if line.chars().count() > HEADER_SAMPLE_WIDTH {
        line = line.chars().take(HEADER_SAMPLE_WIDTH).collect();
        line.push('…');
    }
    line
}
