//! Strike Constraint Value Object

use serde::{Deserialize, Serialize};

use super::TieGroup;

/// Strike constraint of a template leg slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrikeSpec {
    /// No strike attribute in the catalog.
    #[default]
    Unset,
    /// Slots sharing a label must have the same strike.
    Label(char),
    /// Strikes ascend with the offset; equal offsets share a strike.
    Offset(i32),
}

impl StrikeSpec {
    /// Tie-group of this slot, `None` when unconstrained.
    #[must_use]
    pub const fn tie_group(&self) -> Option<TieGroup> {
        match self {
            Self::Unset => None,
            Self::Label(label) => Some(TieGroup::Label(*label)),
            Self::Offset(offset) => Some(TieGroup::Offset(*offset)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strike_spec_tie_group() {
        assert_eq!(StrikeSpec::Unset.tie_group(), None);
        assert_eq!(StrikeSpec::Label('a').tie_group(), Some(TieGroup::Label('a')));
        assert_eq!(StrikeSpec::Offset(-2).tie_group(), Some(TieGroup::Offset(-2)));
    }

    #[test]
    fn strike_spec_default() {
        assert_eq!(StrikeSpec::default(), StrikeSpec::Unset);
    }
}
