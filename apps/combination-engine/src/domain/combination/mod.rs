//! Combination Bounded Context
//!
//! Classifies a set of legs as a named multi-leg strategy:
//! - Combination templates and their per-slot constraints
//! - The catalog of templates, loaded once from a YAML rule source
//! - The matcher that searches leg-to-slot assignments

pub mod catalog;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use catalog::Catalog;
pub use errors::{CatalogError, LegDecodeError};
pub use services::{Classification, Matcher, UNCLASSIFIED};
pub use value_objects::{
    CalendarDelta, CalendarUnit, Cardinality, CombinationTemplate, ExpirationSpec, LegTemplate,
    RatioSign, RatioSpec, StrikeSpec, TieGroup,
};
