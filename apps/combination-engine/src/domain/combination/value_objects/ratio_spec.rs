//! Ratio Constraint Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Required sign of a leg ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioSign {
    /// Ratio must not be negative.
    PositiveOnly,
    /// Ratio must not be positive.
    NegativeOnly,
}

/// Ratio constraint of a template leg slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioSpec {
    /// No ratio attribute in the catalog.
    #[default]
    Any,
    /// Ratio must equal this value exactly.
    Exact(Decimal),
    /// Ratio must carry this sign. Zero satisfies either sign.
    Sign(RatioSign),
}

impl RatioSpec {
    /// Check whether a leg ratio satisfies this constraint.
    #[must_use]
    pub fn admits(&self, ratio: Decimal) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => ratio == *expected,
            Self::Sign(RatioSign::PositiveOnly) => ratio >= Decimal::ZERO,
            Self::Sign(RatioSign::NegativeOnly) => ratio <= Decimal::ZERO,
        }
    }
}
