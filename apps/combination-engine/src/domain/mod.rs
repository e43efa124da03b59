//! Domain Layer
//!
//! Core classification logic with no dependency on configuration or I/O
//! beyond reading the catalog source.
//!
//! # Bounded Contexts
//!
//! - `position`: Input legs supplied by position aggregation
//! - `combination`: Combination templates, the catalog and the matcher

pub mod combination;
pub mod position;
