//! Cardinality Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Leg-count policy of a combination template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// Exactly one leg per template slot.
    Fixed,
    /// At least `min_count` legs, each fitting the single template slot.
    AtLeast {
        /// Minimum number of legs.
        min_count: usize,
    },
    /// A whole number of units, each unit fitting the template slots.
    Multiple,
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::AtLeast { min_count } => write!(f, "at least {min_count}"),
            Self::Multiple => write!(f, "multiple"),
        }
    }
}

impl Cardinality {
    /// Check whether `leg_count` legs can be matched against `unit_size` slots.
    #[must_use]
    pub const fn admits_count(&self, leg_count: usize, unit_size: usize) -> bool {
        match self {
            Self::Fixed => leg_count == unit_size,
            Self::AtLeast { min_count } => leg_count >= *min_count,
            Self::Multiple => unit_size != 0 && leg_count % unit_size == 0,
        }
    }

    /// Check whether matching needs a permutation search.
    #[must_use]
    pub const fn is_permuted(&self) -> bool {
        matches!(self, Self::Fixed | Self::Multiple)
    }
}
