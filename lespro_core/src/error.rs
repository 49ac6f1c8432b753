//! Error types for catalog construction and price calculation.

use thiserror::Error;

/// Invariant violations detected while building a [`crate::Catalog`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A material was given an empty (or whitespace-only) name.
    #[error("material at position {index} has an empty name")]
    EmptyName {
        /// Position of the offending entry in the input list
        index: usize,
    },

    /// Two materials share the same name; names are the selection key.
    #[error("material name `{name}` appears more than once")]
    DuplicateName {
        /// The repeated name
        name: String,
    },

    /// Price is zero, negative, NaN or infinite.
    #[error("material `{name}` has invalid price {price}")]
    InvalidPrice {
        /// Material name
        name: String,
        /// The rejected price
        price: f64,
    },
}

/// Failures of [`crate::Calculator::calculate`].
///
/// "Not ready" situations (no selection, unknown material, empty volume)
/// are not errors; see [`crate::SkipReason`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// The volume text is non-empty but is not a finite number.
    #[error("volume `{text}` is not a number")]
    InvalidVolume {
        /// The raw text as entered
        text: String,
    },

    /// The volume parses, but the total overflows to infinity.
    #[error("volume `{text}` gives a total out of range")]
    TotalOutOfRange {
        /// The raw text as entered
        text: String,
    },
}
