//! Combination Matching Services

pub mod constraint_checker;
mod matcher;
pub mod permutation;

pub use constraint_checker::Assignment;
pub use matcher::{Classification, DEFAULT_MAX_PERMUTED_LEGS, Matcher, UNCLASSIFIED};
