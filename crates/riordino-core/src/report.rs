//! Result materializer: turns computed rows into the reorder report.
use serde::Serialize;

use crate::calculator::{ComputedRow, round_to_tenth};
use crate::coverage::CoverageWeeks;

/// Number of lines shown in an interactive preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

/// One item to reorder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReorderLine {
    /// Item code as found in the source; may be empty.
    pub item_code: String,
    /// Item description as found in the source; may be empty.
    pub description: String,
    /// Units sold in the reference week.
    pub quantity_sold: f64,
    /// Units on hand.
    pub current_stock: f64,
    /// Units to order, a whole number of packs.
    pub order_quantity: u64,
    /// Weight of the order in kg, one decimal.
    pub weight_kg: f64,
}

/// All non-blank lines of one reorder run, in spreadsheet order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReorderReport {
    /// Window the orders were computed for.
    pub coverage_weeks: CoverageWeeks,
    /// 1-based row number of the detected header row.
    pub header_row: u32,
    /// Sum of `order_quantity` over all lines.
    pub total_order_quantity: u64,
    /// Sum of `weight_kg` over all lines, one decimal.
    pub total_weight_kg: f64,
    /// The lines, blank rows excluded.
    pub lines: Vec<ReorderLine>,
}

impl ReorderReport {
    /// The first `n` lines (fewer if the report is shorter).
    pub fn preview(&self, n: usize) -> &[ReorderLine] {
        &self.lines[..n.min(self.lines.len())]
    }

    /// Number of lines with a non-zero order.
    pub fn lines_to_order(&self) -> usize {
        self.lines.iter().filter(|l| l.order_quantity > 0).count()
    }

    /// Returns `true` if the sheet had no non-blank data rows.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Collects the non-blank rows into a [`ReorderReport`].
///
/// No sorting and no de-duplication: line order is the row order of
/// `computed` minus blank rows.
pub fn materialize(
    computed: &[ComputedRow],
    coverage_weeks: CoverageWeeks,
    header_row: u32,
) -> ReorderReport {
    let lines: Vec<ReorderLine> = computed
        .iter()
        .filter(|row| !row.is_blank())
        .map(|row| ReorderLine {
            item_code: row.source.item_code.clone(),
            description: row.source.description.clone(),
            quantity_sold: row.source.quantity_sold,
            current_stock: row.source.current_stock,
            order_quantity: row.amount.order_quantity,
            weight_kg: row.amount.weight_kg,
        })
        .collect();

    let total_order_quantity = lines
        .iter()
        .fold(0u64, |acc, l| acc.saturating_add(l.order_quantity));
    let total_weight_kg = round_to_tenth(lines.iter().map(|l| l.weight_kg).sum());

    ReorderReport {
        coverage_weeks,
        header_row,
        total_order_quantity,
        total_weight_kg,
        lines,
    }
}
