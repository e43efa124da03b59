//! Tie-Group Ordering
//!
//! Strike and expiration constraints share one ordering model. A slot is
//! either labelled (equal labels must hold equal values), offset (values
//! ascend with the offset), or neutral. Labels compare lexically with each
//! other; any other pairing compares numerically with non-offset slots at 0.

use std::cmp::Ordering;

/// Position of a template slot in a strike or expiration walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TieGroup {
    /// Symbolic tie-group label.
    Label(char),
    /// Signed ordering offset.
    Offset(i32),
    /// Neither a label nor an offset (a calendar delta slot).
    Neutral,
}

impl TieGroup {
    const fn numeric(self) -> i32 {
        match self {
            Self::Offset(offset) => offset,
            Self::Label(_) | Self::Neutral => 0,
        }
    }

    /// Compare two slots.
    ///
    /// `Equal` means the slots must hold the same actual value, `Less` means
    /// the first slot's value must be strictly lower.
    #[must_use]
    pub fn compare(self, other: Self) -> Ordering {
        match (self, other) {
            (Self::Label(a), Self::Label(b)) => a.cmp(&b),
            _ => self.numeric().cmp(&other.numeric()),
        }
    }

    /// Total sort key consistent with [`Self::compare`].
    ///
    /// Whenever `compare` is `Less`, the key is strictly lower. Slots that
    /// `compare` as `Equal` across kinds are ordered offset, label, neutral.
    #[must_use]
    pub const fn sort_key(self) -> (i32, u8, char) {
        match self {
            Self::Offset(offset) => (offset, 0, '\0'),
            Self::Label(label) => (0, 1, label),
            Self::Neutral => (0, 2, '\0'),
        }
    }
}
