/// Report and layout rendering: human-readable and JSON modes.
///
/// Human mode prints a short summary followed by an aligned preview table.
/// JSON mode prints one pretty-printed object; for `compute` it is the full
/// [`ReorderReport`], for `inspect` the detected layout.
use std::io::{self, Write};
use std::path::Path;

use riordino_core::{Field, ReorderLine, ReorderReport};
use riordino_excel::WorkbookLayout;
use riordino_excel::sheet::col_letter;

/// Widest description shown in the preview table.
const DESCRIPTION_WIDTH: usize = 32;

// ---------------------------------------------------------------------------
// compute
// ---------------------------------------------------------------------------

/// Writes the report summary and the first `preview` lines.
///
/// # Errors
///
/// Returns an error only if writing to `w` fails.
pub fn write_report_human<W: Write>(
    w: &mut W,
    report: &ReorderReport,
    preview: usize,
    written_to: Option<&Path>,
) -> io::Result<()> {
    writeln!(w, "header row:      {}", report.header_row)?;
    writeln!(w, "coverage weeks:  {}", report.coverage_weeks)?;
    writeln!(
        w,
        "lines:           {} ({} to order)",
        report.lines.len(),
        report.lines_to_order()
    )?;
    writeln!(w, "total quantity:  {}", report.total_order_quantity)?;
    writeln!(w, "total weight:    {:.1} kg", report.total_weight_kg)?;
    if let Some(path) = written_to {
        writeln!(w, "workbook:        {}", path.display())?;
    }

    if report.is_empty() || preview == 0 {
        return Ok(());
    }

    writeln!(w)?;
    writeln!(
        w,
        "{:<12} {:<desc$} {:>8} {:>8} {:>8} {:>8}",
        "code",
        "description",
        "sold",
        "stock",
        "order",
        "kg",
        desc = DESCRIPTION_WIDTH
    )?;
    for line in report.preview(preview) {
        write_line_human(w, line)?;
    }

    let hidden = report.lines.len().saturating_sub(preview);
    if hidden > 0 {
        writeln!(w, "... {hidden} more line(s)")?;
    }
    Ok(())
}

fn write_line_human<W: Write>(w: &mut W, line: &ReorderLine) -> io::Result<()> {
    writeln!(
        w,
        "{:<12} {:<desc$} {:>8} {:>8} {:>8} {:>8.1}",
        line.item_code,
        truncate(&line.description, DESCRIPTION_WIDTH),
        quantity(line.quantity_sold),
        quantity(line.current_stock),
        line.order_quantity,
        line.weight_kg,
        desc = DESCRIPTION_WIDTH
    )
}

/// Writes the full report as one JSON object.
///
/// # Errors
///
/// Returns an error if serialization or writing to `w` fails.
pub fn write_report_json<W: Write>(w: &mut W, report: &ReorderReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, report)?;
    writeln!(w)
}

// ---------------------------------------------------------------------------
// inspect
// ---------------------------------------------------------------------------

/// Writes the detected layout as aligned key/value lines.
///
/// # Errors
///
/// Returns an error only if writing to `w` fails.
pub fn write_layout_human<W: Write>(w: &mut W, layout: &WorkbookLayout) -> io::Result<()> {
    writeln!(w, "sheet:       {}", layout.sheet_name)?;
    writeln!(w, "header row:  {}", layout.header.number)?;
    writeln!(w, "data rows:   {}", layout.data_rows)?;
    writeln!(w, "columns:")?;
    for (field, col) in layout.columns.iter() {
        writeln!(
            w,
            "  {:<18} {:<3} {}",
            field.label(),
            col_letter(col),
            header_label(layout, col)
        )?;
    }
    Ok(())
}

/// Builds the JSON form of the layout.
fn layout_json(layout: &WorkbookLayout) -> serde_json::Value {
    let columns: Vec<serde_json::Value> = layout
        .columns
        .iter()
        .map(|(field, col)| {
            serde_json::json!({
                "field": field.label(),
                "column": col_letter(col),
                "header": header_label(layout, col),
                "written": is_output(field),
            })
        })
        .collect();

    serde_json::json!({
        "sheet": layout.sheet_name,
        "header_row": layout.header.number,
        "data_rows": layout.data_rows,
        "headers": layout.header.labels,
        "columns": columns,
    })
}

/// Writes the layout as one JSON object.
///
/// # Errors
///
/// Returns an error if serialization or writing to `w` fails.
pub fn write_layout_json<W: Write>(w: &mut W, layout: &WorkbookLayout) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, &layout_json(layout))?;
    writeln!(w)
}

// ---------------------------------------------------------------------------
// helpers
// ---------------------------------------------------------------------------

fn header_label(layout: &WorkbookLayout, col: usize) -> &str {
    layout.header.labels.get(col).map_or("", String::as_str)
}

fn is_output(field: Field) -> bool {
    matches!(field, Field::OrderQuantity | Field::OrderWeightKg)
}

/// Whole quantities without a trailing `.0`.
fn quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
