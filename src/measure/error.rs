//! Error types for molecular measurements.
//!
//! Every failure is reported eagerly: a bad threshold is rejected before any
//! pair is scanned, and an unknown symbol aborts the whole computation without
//! a partial result.

use thiserror::Error;

/// Errors that can occur while measuring a molecule.
#[derive(Debug, Error)]
pub enum Error {
    /// An element symbol has no entry in the atomic weight table.
    ///
    /// Lookup is case-sensitive, so `"h"` is reported here even though `"H"`
    /// is present.
    #[error("unknown element symbol: '{0}'")]
    UnknownElement(String),

    /// A numeric argument violates its documented precondition.
    #[error("invalid argument '{name}': {detail}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Description of the violated precondition.
        detail: String,
    },

    /// Center of mass was requested for a molecule without atoms.
    #[error("molecule is empty: at least one atom is required")]
    EmptyMolecule,

    /// Symbol and coordinate sequences have different lengths.
    #[error("got {symbols} symbols but {coordinates} coordinates")]
    DimensionMismatch {
        /// Number of element symbols supplied.
        symbols: usize,
        /// Number of coordinates supplied.
        coordinates: usize,
    },

    /// Failed to parse an atomic weight table from TOML.
    #[error("failed to parse atomic weight table: {0}")]
    WeightsParse(#[from] toml::de::Error),

    /// An atomic weight table entry is zero, negative, or not finite.
    #[error("invalid atomic weight for '{symbol}': {weight} (must be positive and finite)")]
    InvalidWeight {
        /// Element symbol of the bad entry.
        symbol: String,
        /// The rejected weight.
        weight: f64,
    },

    /// The same element symbol was given more than one weight.
    #[error("duplicate atomic weight entry for '{0}'")]
    DuplicateWeight(String),
}

impl Error {
    /// Creates an [`InvalidArgument`](Error::InvalidArgument) error.
    pub fn invalid_argument(name: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            detail: detail.into(),
        }
    }

    pub fn unknown_element(symbol: &str) -> Self {
        Self::UnknownElement(symbol.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        assert_eq!(
            Error::unknown_element("Xx").to_string(),
            "unknown element symbol: 'Xx'"
        );
        assert_eq!(
            Error::invalid_argument("min_bond", "must be non-negative, got -1").to_string(),
            "invalid argument 'min_bond': must be non-negative, got -1"
        );
        assert_eq!(
            Error::DimensionMismatch {
                symbols: 3,
                coordinates: 2
            }
            .to_string(),
            "got 3 symbols but 2 coordinates"
        );
        assert_eq!(
            Error::DuplicateWeight("H".into()).to_string(),
            "duplicate atomic weight entry for 'H'"
        );
    }
}
