//! Packaging and weight conversion rules applied to every order.
use std::fmt;

/// Items are ordered in whole packs of this many units.
pub const DEFAULT_PACK_SIZE: u32 = 10;

/// Weight of one unit in kilograms (a pack of 10 weighs 0.2 kg).
pub const DEFAULT_UNIT_WEIGHT_KG: f64 = 0.02;

/// Pack size and unit weight used by the reorder calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReorderPolicy {
    pack_size: u32,
    unit_weight_kg: f64,
}

impl ReorderPolicy {
    /// Builds a policy, validating both parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] when `pack_size` is zero or `unit_weight_kg`
    /// is negative or not finite.
    pub fn new(pack_size: u32, unit_weight_kg: f64) -> Result<Self, PolicyError> {
        if pack_size == 0 {
            return Err(PolicyError::ZeroPackSize);
        }
        if !unit_weight_kg.is_finite() || unit_weight_kg < 0.0 {
            return Err(PolicyError::InvalidUnitWeight {
                value: unit_weight_kg,
            });
        }
        Ok(Self {
            pack_size,
            unit_weight_kg,
        })
    }

    /// Units per pack.
    pub fn pack_size(&self) -> u32 {
        self.pack_size
    }

    /// Kilograms per unit.
    pub fn unit_weight_kg(&self) -> f64 {
        self.unit_weight_kg
    }
}

impl Default for ReorderPolicy {
    fn default() -> Self {
        Self {
            pack_size: DEFAULT_PACK_SIZE,
            unit_weight_kg: DEFAULT_UNIT_WEIGHT_KG,
        }
    }
}

/// A [`ReorderPolicy`] parameter is out of range.
#[derive(Debug, Clone, PartialEq)]
pub enum PolicyError {
    /// The pack size is zero.
    ZeroPackSize,
    /// The unit weight is negative, NaN or infinite.
    InvalidUnitWeight {
        /// The rejected weight.
        value: f64,
    },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPackSize => f.write_str("pack size must be at least 1"),
            Self::InvalidUnitWeight { value } => {
                write!(f, "unit weight must be a finite, non-negative number of kg, got {value}")
            }
        }
    }
}

impl std::error::Error for PolicyError {}
