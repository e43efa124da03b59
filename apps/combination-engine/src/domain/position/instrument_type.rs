//! Instrument Type Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument type of a leg or of a template leg slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentType {
    /// Call option.
    Call,
    /// Put option.
    Put,
    /// Option that is neither a plain call nor a plain put.
    OtherOption,
    /// Futures contract.
    Future,
    /// Stock or other underlying instrument.
    Underlying,
    /// Unrecognised instrument.
    #[default]
    Unknown,
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => write!(f, "Call"),
            Self::Put => write!(f, "Put"),
            Self::OtherOption => write!(f, "Other Option"),
            Self::Future => write!(f, "Future"),
            Self::Underlying => write!(f, "Underlying"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl InstrumentType {
    /// Decode a single-character catalog code.
    ///
    /// `S` is accepted as an alias of `U` for stock underlyings.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'C' => Some(Self::Call),
            'P' => Some(Self::Put),
            'O' => Some(Self::OtherOption),
            'F' => Some(Self::Future),
            'U' | 'S' => Some(Self::Underlying),
            'X' => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Catalog code for this type.
    #[must_use]
    pub const fn code(&self) -> char {
        match self {
            Self::Call => 'C',
            Self::Put => 'P',
            Self::OtherOption => 'O',
            Self::Future => 'F',
            Self::Underlying => 'U',
            Self::Unknown => 'X',
        }
    }

    /// Check if this type belongs to the option family (call, put, other option).
    #[must_use]
    pub const fn is_option(&self) -> bool {
        matches!(self, Self::Call | Self::Put | Self::OtherOption)
    }
}
