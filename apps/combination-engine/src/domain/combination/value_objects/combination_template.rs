//! Combination Template Value Object

use serde::{Deserialize, Serialize};

use super::{Cardinality, LegTemplate};

/// One catalog entry: a named strategy and the slots its legs must fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationTemplate {
    name: String,
    short_name: String,
    identifier: String,
    cardinality: Cardinality,
    legs: Vec<LegTemplate>,
}

impl CombinationTemplate {
    /// Create a new template.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        identifier: impl Into<String>,
        cardinality: Cardinality,
        legs: Vec<LegTemplate>,
    ) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            identifier: identifier.into(),
            cardinality,
            legs,
        }
    }

    /// Get the strategy name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the short name.
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Get the identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Get the cardinality.
    #[must_use]
    pub const fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Get the leg slots in template order.
    #[must_use]
    pub fn legs(&self) -> &[LegTemplate] {
        &self.legs
    }

    /// Number of slots in one unit of this template.
    #[must_use]
    pub fn unit_size(&self) -> usize {
        self.legs.len()
    }

    /// Check whether `leg_count` legs can possibly match this template.
    #[must_use]
    pub fn admits_count(&self, leg_count: usize) -> bool {
        self.cardinality.admits_count(leg_count, self.unit_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::position::InstrumentType;

    fn vertical() -> CombinationTemplate {
        CombinationTemplate::new(
            "Vertical",
            "VRT",
            "vertical",
            Cardinality::Fixed,
            vec![
                LegTemplate::new(InstrumentType::Call),
                LegTemplate::new(InstrumentType::Call),
            ],
        )
    }

    #[test]
    fn template_accessors() {
        let template = vertical();
        assert_eq!(template.name(), "Vertical");
        assert_eq!(template.short_name(), "VRT");
        assert_eq!(template.identifier(), "vertical");
        assert_eq!(template.cardinality(), Cardinality::Fixed);
        assert_eq!(template.unit_size(), 2);
    }

    #[test]
    fn template_admits_count() {
        let template = vertical();
        assert!(template.admits_count(2));
        assert!(!template.admits_count(3));
    }
}
