//! Reorder calculator.
//!
//! For each row: `demand = sold × weeks`, `shortfall = max(0, demand − stock)`,
//! the order is the shortfall rounded up to a whole number of packs, and the
//! weight is the order times the unit weight rounded to one decimal.
//!
//! Everything here is pure. Values reach this module already coerced to
//! numbers (blank or unparseable cells are 0).

use crate::coverage::CoverageWeeks;
use crate::policy::ReorderPolicy;

/// Quantity to order and its weight.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderAmount {
    /// Units to order; always a multiple of the pack size.
    pub order_quantity: u64,
    /// Weight of the order in kg, rounded to one decimal.
    pub weight_kg: f64,
}

/// One data row as read from the source sheet, with typed values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceRow {
    /// 1-based spreadsheet row number.
    pub row_number: u32,
    /// Item code; empty when the cell was blank.
    pub item_code: String,
    /// Item description; empty when the cell was blank.
    pub description: String,
    /// Units sold in the reference week.
    pub quantity_sold: f64,
    /// Units on hand.
    pub current_stock: f64,
}

impl SourceRow {
    /// A row with no code, no description and nothing sold or stocked.
    ///
    /// Blank rows still receive (zero) output cells in the workbook but are
    /// left out of the reorder report.
    pub fn is_blank(&self) -> bool {
        self.item_code.is_empty()
            && self.description.is_empty()
            && self.quantity_sold == 0.0
            && self.current_stock == 0.0
    }
}

/// A source row paired with its computed order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedRow {
    /// The row the order was computed from.
    pub source: SourceRow,
    /// The computed order.
    pub amount: OrderAmount,
}

impl ComputedRow {
    /// See [`SourceRow::is_blank`].
    pub fn is_blank(&self) -> bool {
        self.source.is_blank()
    }
}

/// Computes the order for one item.
pub fn compute_order(
    quantity_sold: f64,
    current_stock: f64,
    weeks: CoverageWeeks,
    policy: &ReorderPolicy,
) -> OrderAmount {
    let demand = quantity_sold * f64::from(weeks.get());
    // f64::max ignores a NaN operand, so a NaN shortfall collapses to 0.
    let shortfall = (demand - current_stock).max(0.0);

    let pack_size = u64::from(policy.pack_size());
    let packs = (shortfall / f64::from(policy.pack_size())).ceil() as u64;
    let order_quantity = packs.saturating_mul(pack_size);

    OrderAmount {
        order_quantity,
        weight_kg: round_to_tenth(order_quantity as f64 * policy.unit_weight_kg()),
    }
}

/// Computes the order for every row, keeping input order.
pub fn compute_rows<I>(rows: I, weeks: CoverageWeeks, policy: &ReorderPolicy) -> Vec<ComputedRow>
where
    I: IntoIterator<Item = SourceRow>,
{
    rows.into_iter()
        .map(|source| {
            let amount = compute_order(source.quantity_sold, source.current_stock, weeks, policy);
            ComputedRow { source, amount }
        })
        .collect()
}

/// Rounds half away from zero to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
