//! Matcher configuration.

use serde::{Deserialize, Serialize};

use crate::domain::combination::services::DEFAULT_MAX_PERMUTED_LEGS;

/// Largest accepted permutation ceiling (10! orderings per template).
pub const MAX_PERMUTED_LEGS_LIMIT: usize = 10;

/// Matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Largest leg count submitted to fixed and multiple template searches.
    #[serde(default = "default_max_permuted_legs")]
    pub max_permuted_legs: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_permuted_legs: default_max_permuted_legs(),
        }
    }
}

const fn default_max_permuted_legs() -> usize {
    DEFAULT_MAX_PERMUTED_LEGS
}
