//! Position Leg Value Object

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::InstrumentType;

/// One instrument position within a set of legs to classify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// Instrument type.
    #[serde(rename = "type")]
    instrument_type: InstrumentType,
    /// Signed quantity (positive long, negative short).
    ratio: Decimal,
    /// Strike price.
    #[serde(default)]
    strike: Decimal,
    /// Expiration date.
    expiration: NaiveDate,
}

impl Leg {
    /// Create a new leg.
    #[must_use]
    pub const fn new(
        instrument_type: InstrumentType,
        ratio: Decimal,
        strike: Decimal,
        expiration: NaiveDate,
    ) -> Self {
        Self {
            instrument_type,
            ratio,
            strike,
            expiration,
        }
    }

    /// Create a call leg.
    #[must_use]
    pub const fn call(ratio: Decimal, strike: Decimal, expiration: NaiveDate) -> Self {
        Self::new(InstrumentType::Call, ratio, strike, expiration)
    }

    /// Create a put leg.
    #[must_use]
    pub const fn put(ratio: Decimal, strike: Decimal, expiration: NaiveDate) -> Self {
        Self::new(InstrumentType::Put, ratio, strike, expiration)
    }

    /// Get the instrument type.
    #[must_use]
    pub const fn instrument_type(&self) -> InstrumentType {
        self.instrument_type
    }

    /// Get the signed ratio.
    #[must_use]
    pub const fn ratio(&self) -> Decimal {
        self.ratio
    }

    /// Get the strike.
    #[must_use]
    pub const fn strike(&self) -> Decimal {
        self.strike
    }

    /// Get the expiration date.
    #[must_use]
    pub const fn expiration(&self) -> NaiveDate {
        self.expiration
    }
}
