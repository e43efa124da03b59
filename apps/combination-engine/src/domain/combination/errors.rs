//! Combination Catalog Errors

use thiserror::Error;

/// Errors decoding a single catalog leg.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LegDecodeError {
    /// The leg carries no `type` attribute.
    #[error("missing type attribute")]
    MissingType,

    /// The `type` attribute is not a known instrument code.
    #[error("unknown instrument type: {0:?}")]
    UnknownInstrumentType(String),

    /// The `ratio` attribute is neither a sign nor a number.
    #[error("invalid ratio: {0:?}")]
    InvalidRatio(String),

    /// A tie-group attribute is empty.
    #[error("empty {attribute} label")]
    EmptyTieGroup {
        /// Attribute name.
        attribute: &'static str,
    },

    /// The count prefix of an expiration delta is not an integer.
    #[error("invalid expiration offset: {0:?}")]
    InvalidExpirationOffset(String),

    /// An offset attribute was written as a YAML number instead of a string.
    #[error("{attribute} literal {literal} must be quoted")]
    UnquotedOffset {
        /// Attribute name.
        attribute: &'static str,
        /// The number as parsed.
        literal: String,
    },

    /// Two attributes that set the same constraint are both present.
    #[error("conflicting attributes {first} and {second}")]
    ConflictingAttributes {
        /// First attribute name.
        first: &'static str,
        /// Second attribute name.
        second: &'static str,
    },
}

/// Errors that can occur loading the combination catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the catalog source.
    #[error("Failed to read catalog '{path}': {source}")]
    ReadError {
        /// Path to the catalog.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The catalog source is not valid YAML or has the wrong shape.
    #[error("Failed to parse catalog YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// A combination entry is structurally invalid.
    #[error("Invalid combination '{name}': {message}")]
    InvalidCombination {
        /// Combination name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A leg of a combination entry cannot be decoded.
    #[error("Invalid leg {index} of combination '{combination}': {source}")]
    InvalidLeg {
        /// Combination name.
        combination: String,
        /// Zero-based leg index within the combination.
        index: usize,
        /// The decode failure.
        source: LegDecodeError,
    },
}
