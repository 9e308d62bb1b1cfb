//! Cell coercion and sheet-row helpers over calamine ranges.
//!
//! Cells arrive as a mix of strings, floats, integers and cached formula
//! results. [`cell_text`] and [`cell_number`] are the only place where that
//! mix is turned into clean values: text falls back to `""` and numbers fall
//! back to `0`.
use calamine::{Data, Range};

/// One worksheet row with absolute positions.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    /// 1-based row number, as shown in spreadsheet software.
    pub number: u32,
    /// Cells from column A onward; index 0 is column A.
    pub cells: Vec<Data>,
}

impl SheetRow {
    /// Returns the cell at zero-based column `col`, or [`Data::Empty`].
    pub fn cell(&self, col: usize) -> &Data {
        self.cells.get(col).unwrap_or(&Data::Empty)
    }

    /// Text of every cell in the row.
    pub fn texts(&self) -> Vec<String> {
        self.cells.iter().map(cell_text).collect()
    }

    /// Returns `true` if every cell is empty or whitespace.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| cell_text(c).is_empty())
    }
}

/// Flattens a calamine range into rows with absolute numbering.
///
/// Calamine ranges start at the first used cell, not at `A1`. The offset is
/// added back here so row numbers and column indices line up with what a
/// writer addresses in the same workbook.
pub fn sheet_rows(range: &Range<Data>) -> Vec<SheetRow> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let lead = start_col as usize;

    range
        .rows()
        .zip(start_row..)
        .map(|(cells, zero_based)| {
            let mut absolute = Vec::with_capacity(lead + cells.len());
            absolute.resize(lead, Data::Empty);
            absolute.extend_from_slice(cells);
            SheetRow {
                number: zero_based + 1,
                cells: absolute,
            }
        })
        .collect()
}

/// Converts a cell to trimmed text.
///
/// Whole floats render without a fractional part, so a numeric item code
/// `12345.0` reads as `"12345"`. Empty and error cells give `""`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_owned(),
        Data::Float(f) => {
            if *f == f.floor() && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
        Data::Empty => String::new(),
    }
}

/// Converts a cell to a finite number, `0.0` when it has none.
///
/// Numeric cells are taken as-is. Text is parsed after trimming and accepts
/// both `12.5` and the Italian `12,5` / `1.234,5` notations. Without a comma,
/// dots that split the integer part into groups of three (`1.234`,
/// `12.345.678`) are thousands separators; any other dot is a decimal point.
/// Booleans, dates, errors and empty cells are `0.0`.
pub fn cell_number(cell: &Data) -> f64 {
    let value = match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) => parse_number(s).unwrap_or(0.0),
        Data::Bool(_)
        | Data::DateTime(_)
        | Data::DateTimeIso(_)
        | Data::DurationIso(_)
        | Data::Error(_)
        | Data::Empty => 0.0,
    };
    if value.is_finite() { value } else { 0.0 }
}

fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let canonical = if trimmed.contains(',') || is_dot_grouped(trimmed) {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_owned()
    };
    canonical.parse::<f64>().ok()
}

/// `true` for integers written with `.` thousands separators, such as
/// `1.234` or `-12.345.678`. A leading `0` group (`0.125`) is a decimal.
fn is_dot_grouped(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    let mut groups = digits.split('.');
    let Some(lead) = groups.next() else {
        return false;
    };
    let lead_ok = (1..=3).contains(&lead.len())
        && !lead.starts_with('0')
        && lead.bytes().all(|b| b.is_ascii_digit());
    let mut rest = groups.peekable();
    lead_ok
        && rest.peek().is_some()
        && rest.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()))
}

/// Builds a column reference string like `"B"` from a zero-based column index.
pub fn col_letter(col_idx: usize) -> String {
    let mut n = col_idx + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}
