//! Coverage window: how many weeks of demand an order must cover.
//!
//! The window is a small UI parameter, so it has two constructors. The strict
//! one ([`TryFrom<u8>`]) rejects anything outside `1..=4`. The lenient ones
//! ([`CoverageWeeks::from_raw`], [`CoverageWeeks::from_input`]) never fail:
//! absent, non-numeric or non-finite input falls back to 4 weeks, fractional
//! input is truncated and out-of-range input is clamped. They hand back the
//! [`InvalidCoverageWeeks`] describing what was adjusted so the caller can
//! report it.
use std::fmt;

use serde::Serialize;

/// Number of weeks of demand (current week included) an order must cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CoverageWeeks(u8);

impl CoverageWeeks {
    /// Smallest accepted window.
    pub const MIN: u8 = 1;
    /// Largest accepted window.
    pub const MAX: u8 = 4;
    /// Window used when the input is absent or unusable.
    pub const DEFAULT: CoverageWeeks = CoverageWeeks(Self::MAX);

    /// Returns the number of weeks.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Builds a window from an optional raw number, never failing.
    ///
    /// `None` yields [`CoverageWeeks::DEFAULT`] with no diagnostic.
    pub fn from_raw(raw: Option<f64>) -> (Self, Option<InvalidCoverageWeeks>) {
        let Some(value) = raw else {
            return (Self::DEFAULT, None);
        };
        if value.is_nan() {
            return (
                Self::DEFAULT,
                Some(InvalidCoverageWeeks::NotANumber {
                    input: value.to_string(),
                }),
            );
        }
        if value.is_infinite() {
            return (Self::DEFAULT, Some(InvalidCoverageWeeks::OutOfRange { value }));
        }

        let whole = value.trunc();
        let clamped = whole.clamp(f64::from(Self::MIN), f64::from(Self::MAX));
        let weeks = Self(clamped as u8);

        if whole != clamped {
            (weeks, Some(InvalidCoverageWeeks::OutOfRange { value }))
        } else if whole != value {
            (weeks, Some(InvalidCoverageWeeks::Fractional { value }))
        } else {
            (weeks, None)
        }
    }

    /// Parses a window from user text, never failing.
    ///
    /// Blank text counts as absent. Text that is not a number yields
    /// [`CoverageWeeks::DEFAULT`] together with
    /// [`InvalidCoverageWeeks::NotANumber`].
    pub fn from_input(input: &str) -> (Self, Option<InvalidCoverageWeeks>) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::from_raw(None);
        }
        match trimmed.replace(',', ".").parse::<f64>() {
            Ok(value) => Self::from_raw(Some(value)),
            Err(_) => (
                Self::DEFAULT,
                Some(InvalidCoverageWeeks::NotANumber {
                    input: trimmed.to_owned(),
                }),
            ),
        }
    }
}

impl Default for CoverageWeeks {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for CoverageWeeks {
    type Error = InvalidCoverageWeeks;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidCoverageWeeks::OutOfRange {
                value: f64::from(value),
            })
        }
    }
}

impl fmt::Display for CoverageWeeks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a coverage-window input was not usable as given.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidCoverageWeeks {
    /// The input is not a number.
    NotANumber {
        /// The rejected text.
        input: String,
    },
    /// The input lies outside `1..=4` (or is infinite).
    OutOfRange {
        /// The rejected value.
        value: f64,
    },
    /// The input has a fractional part.
    Fractional {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for InvalidCoverageWeeks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber { input } => {
                write!(f, "coverage weeks {input:?} is not a number")
            }
            Self::OutOfRange { value } => write!(
                f,
                "coverage weeks {value} is outside {}..={}",
                CoverageWeeks::MIN,
                CoverageWeeks::MAX
            ),
            Self::Fractional { value } => {
                write!(f, "coverage weeks {value} is not a whole number")
            }
        }
    }
}

impl std::error::Error for InvalidCoverageWeeks {}
