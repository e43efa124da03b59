//! Template Leg Slot Value Object

use serde::{Deserialize, Serialize};

use super::{ExpirationSpec, RatioSpec, StrikeSpec};
use crate::domain::position::InstrumentType;

/// Constraints one leg must satisfy to fill a template slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegTemplate {
    /// Required instrument type.
    pub instrument_type: InstrumentType,
    /// Ratio constraint.
    pub ratio: RatioSpec,
    /// Strike constraint.
    pub strike: StrikeSpec,
    /// Expiration constraint.
    pub expiration: ExpirationSpec,
}

impl LegTemplate {
    /// Create a slot of the given type with no other constraint.
    #[must_use]
    pub const fn new(instrument_type: InstrumentType) -> Self {
        Self {
            instrument_type,
            ratio: RatioSpec::Any,
            strike: StrikeSpec::Unset,
            expiration: ExpirationSpec::Unset,
        }
    }

    /// Set the ratio constraint.
    #[must_use]
    pub const fn with_ratio(mut self, ratio: RatioSpec) -> Self {
        self.ratio = ratio;
        self
    }

    /// Set the strike constraint.
    #[must_use]
    pub const fn with_strike(mut self, strike: StrikeSpec) -> Self {
        self.strike = strike;
        self
    }

    /// Set the expiration constraint.
    #[must_use]
    pub const fn with_expiration(mut self, expiration: ExpirationSpec) -> Self {
        self.expiration = expiration;
        self
    }
}
