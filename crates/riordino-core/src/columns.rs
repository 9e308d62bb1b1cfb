//! Column resolution: binds each semantic field to a concrete column.
//!
//! Resolution is driven by [`COLUMN_CANDIDATES`], an ordered table of
//! substrings per field. For each field the candidates are tried in order;
//! for each candidate the header cells are scanned left to right and the
//! first cell whose normalized text contains the candidate wins. Supporting a
//! new export layout means adding a candidate to the table.
//!
//! All six fields are required. The two output fields (order quantity and
//! order weight) must already exist as headers in the source workbook; they
//! are filled in, never created. An output field never binds to a column
//! already taken by another field, so a header like `Venduta kg` cannot be
//! both read as sales and overwritten with weights.
use std::fmt;

use crate::normalize::normalize_text;

/// The semantic fields a reorder workbook must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Item code (read).
    ItemCode,
    /// Item description (read).
    Description,
    /// Quantity sold in the reference week (read).
    QuantitySold,
    /// Stock currently on hand (read).
    CurrentStock,
    /// Quantity to order (written).
    OrderQuantity,
    /// Weight of the order in kilograms (written).
    OrderWeightKg,
}

impl Field {
    /// Every field, in the order they are resolved and reported.
    pub const ALL: [Field; 6] = [
        Field::ItemCode,
        Field::Description,
        Field::QuantitySold,
        Field::CurrentStock,
        Field::OrderQuantity,
        Field::OrderWeightKg,
    ];

    /// Human-readable name used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Self::ItemCode => "item code",
            Self::Description => "description",
            Self::QuantitySold => "quantity sold",
            Self::CurrentStock => "current stock",
            Self::OrderQuantity => "order quantity",
            Self::OrderWeightKg => "order weight (kg)",
        }
    }

    /// Header text written back over the four numeric columns after a
    /// reorder pass. Every label still satisfies its own candidate list, so a
    /// rewritten workbook can be fed through the pipeline again.
    pub fn canonical_header(self) -> Option<&'static str> {
        match self {
            Self::QuantitySold => Some("Quantità venduta"),
            Self::CurrentStock => Some("Giacenza"),
            Self::OrderQuantity => Some("Quantità da ordinare"),
            Self::OrderWeightKg => Some("Peso ordine (kg)"),
            Self::ItemCode | Self::Description => None,
        }
    }

    /// Ordered candidate substrings for this field.
    pub fn candidates(self) -> &'static [&'static str] {
        for (field, candidates) in COLUMN_CANDIDATES {
            if *field == self {
                return candidates;
            }
        }
        &[]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Candidate substrings per field, matched against normalized header text.
///
/// Candidates are already normalized (lowercase, unaccented).
pub static COLUMN_CANDIDATES: &[(Field, &[&str])] = &[
    (
        Field::ItemCode,
        &[
            "codice articolo",
            "codice prodotto",
            "codice aams",
            "codice",
            "cod",
            "item code",
            "sku",
        ],
    ),
    (
        Field::Description,
        &["descrizione", "denominazione", "prodotto", "description"],
    ),
    (
        Field::QuantitySold,
        &[
            "quantita venduta",
            "q.ta venduta",
            "qta venduta",
            "venduta",
            "venduto",
            "vendite",
        ],
    ),
    (
        Field::CurrentStock,
        &["giacenza bar", "giacenza", "giacenze"],
    ),
    (
        Field::OrderQuantity,
        &[
            "quantita da ordinare",
            "q.ta da ordinare",
            "qta da ordinare",
            "da ordinare",
            "riordino",
            "order quantity",
            "to order",
        ],
    ),
    (
        Field::OrderWeightKg,
        &["peso ordine", "peso kg", "peso", "kg", "weight"],
    ),
];

/// Zero-based column index for each [`Field`], built once per workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnMap {
    item_code: usize,
    description: usize,
    quantity_sold: usize,
    current_stock: usize,
    order_quantity: usize,
    order_weight_kg: usize,
}

impl ColumnMap {
    /// Returns the zero-based column index bound to `field`.
    pub fn get(&self, field: Field) -> usize {
        match field {
            Field::ItemCode => self.item_code,
            Field::Description => self.description,
            Field::QuantitySold => self.quantity_sold,
            Field::CurrentStock => self.current_stock,
            Field::OrderQuantity => self.order_quantity,
            Field::OrderWeightKg => self.order_weight_kg,
        }
    }

    /// Iterates `(field, column index)` pairs in [`Field::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, usize)> {
        let map = *self;
        Field::ALL.into_iter().map(move |f| (f, map.get(f)))
    }
}

/// A required field has no matching header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNotFound {
    /// The field that could not be bound.
    pub field: Field,
    /// The raw header texts that were searched, left to right.
    pub headers: Vec<String>,
}

impl fmt::Display for ColumnNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no column found for {:?}; headers found: [{}]",
            self.field.label(),
            self.headers.join(", ")
        )
    }
}

impl std::error::Error for ColumnNotFound {}

/// Resolves every [`Field`] against the header row.
///
/// Fails on the first field without a match, before any data row is looked
/// at.
///
/// # Errors
///
/// Returns [`ColumnNotFound`] naming the missing field and echoing all
/// headers.
pub fn resolve_columns<S: AsRef<str>>(headers: &[S]) -> Result<ColumnMap, ColumnNotFound> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_text(h.as_ref())).collect();

    let find = |field: Field, taken: &[usize]| -> Result<usize, ColumnNotFound> {
        find_column(&normalized, field.candidates(), taken).ok_or_else(|| ColumnNotFound {
            field,
            headers: headers.iter().map(|h| h.as_ref().to_owned()).collect(),
        })
    };

    let item_code = find(Field::ItemCode, &[])?;
    let description = find(Field::Description, &[])?;
    let quantity_sold = find(Field::QuantitySold, &[])?;
    let current_stock = find(Field::CurrentStock, &[])?;
    let order_quantity = find(
        Field::OrderQuantity,
        &[item_code, description, quantity_sold, current_stock],
    )?;
    let order_weight_kg = find(
        Field::OrderWeightKg,
        &[
            item_code,
            description,
            quantity_sold,
            current_stock,
            order_quantity,
        ],
    )?;

    Ok(ColumnMap {
        item_code,
        description,
        quantity_sold,
        current_stock,
        order_quantity,
        order_weight_kg,
    })
}

/// First header matching the earliest candidate, skipping `taken` columns.
fn find_column(normalized: &[String], candidates: &[&str], taken: &[usize]) -> Option<usize> {
    candidates.iter().find_map(|candidate| {
        normalized.iter().enumerate().find_map(|(idx, header)| {
            (!taken.contains(&idx) && !header.is_empty() && header.contains(candidate))
                .then_some(idx)
        })
    })
}
