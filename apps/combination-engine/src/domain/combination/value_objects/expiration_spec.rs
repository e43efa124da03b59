//! Expiration Constraint Value Object

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::TieGroup;

/// Calendar field a relative expiration delta is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarUnit {
    /// Day-of-month difference.
    Day,
    /// Month difference.
    Month,
    /// Month difference in 3-month buckets.
    Quarter,
    /// Year difference.
    Year,
}

impl CalendarUnit {
    /// Decode the unit suffix of an expiration offset (`d`, `m`, `q`, `y`).
    #[must_use]
    pub const fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            'd' => Some(Self::Day),
            'm' => Some(Self::Month),
            'q' => Some(Self::Quarter),
            'y' => Some(Self::Year),
            _ => None,
        }
    }
}

/// Required calendar distance from the reference expiration.
///
/// Distances are raw field differences, not durations: a one-month delta
/// from 2024-01-15 admits any day in February 2024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDelta {
    /// Number of units.
    pub count: i32,
    /// Calendar unit.
    pub unit: CalendarUnit,
}

impl CalendarDelta {
    /// Create a new delta.
    #[must_use]
    pub const fn new(count: i32, unit: CalendarUnit) -> Self {
        Self { count, unit }
    }

    /// Check whether `date` sits exactly this delta away from `reference`.
    #[must_use]
    pub fn spans(&self, reference: NaiveDate, date: NaiveDate) -> bool {
        let months = date.month() as i32 - reference.month() as i32;
        match self.unit {
            CalendarUnit::Day => date.day() as i32 - reference.day() as i32 == self.count,
            CalendarUnit::Month => months == self.count,
            CalendarUnit::Quarter => months == 3 * self.count,
            CalendarUnit::Year => date.year() - reference.year() == self.count,
        }
    }
}

impl fmt::Display for CalendarDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.unit {
            CalendarUnit::Day => 'd',
            CalendarUnit::Month => 'm',
            CalendarUnit::Quarter => 'q',
            CalendarUnit::Year => 'y',
        };
        write!(f, "{}{suffix}", self.count)
    }
}

/// Expiration constraint of a template leg slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpirationSpec {
    /// No expiration attribute in the catalog.
    #[default]
    Unset,
    /// Slots sharing a label must expire on the same date.
    Label(char),
    /// Expirations ascend with the offset; equal offsets share a date.
    Offset(i32),
    /// Expiration sits a fixed calendar distance from the reference slot.
    Delta(CalendarDelta),
}

impl ExpirationSpec {
    /// Tie-group of this slot, `None` when unconstrained.
    #[must_use]
    pub const fn tie_group(&self) -> Option<TieGroup> {
        match self {
            Self::Unset => None,
            Self::Label(label) => Some(TieGroup::Label(*label)),
            Self::Offset(offset) => Some(TieGroup::Offset(*offset)),
            Self::Delta(_) => Some(TieGroup::Neutral),
        }
    }
}
