//! Header-row predicate.
//!
//! Source workbooks often carry title rows, shop names or export dates above
//! the real column titles. The header row is recognised by content: its
//! concatenated, normalized text must mention both a "sold" column and a
//! "stock" column.

use crate::normalize::normalize_text;

/// Number of leading rows searched for the header row (rows 1 through 30).
pub const HEADER_SCAN_LIMIT: u32 = 30;

const SOLD_TOKENS: &[&str] = &["venduta", "venduto", "vendite", "sold"];
const STOCK_TOKENS: &[&str] = &["giacenza", "giacenze", "stock"];

/// Returns `true` when the row's cells, taken together, look like the
/// column-title row of a sales/stock export.
pub fn is_header_row<S: AsRef<str>>(cells: &[S]) -> bool {
    let joined = cells.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
    let text = normalize_text(&joined);
    contains_any(&text, SOLD_TOKENS) && contains_any(&text, STOCK_TOKENS)
}

fn contains_any(text: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|t| text.contains(t))
}
