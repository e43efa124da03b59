// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::redundant_clone,
        clippy::needless_pass_by_value
    )
)]

//! Combination Engine - Rust Core Library
//!
//! Classifies an unordered set of position legs as a named multi-leg
//! strategy (vertical spread, straddle, butterfly, ...) by matching it
//! against a declarative catalog of combination templates.
//!
//! # Architecture
//!
//! - **Domain**: Core classification logic
//!   - `position`: Input legs and instrument types
//!   - `combination`: Templates, catalog, constraint checks and the matcher
//!
//! - **Config**: YAML configuration with environment interpolation
//!
//! - **Telemetry**: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use combination_engine::{Catalog, Matcher};
//!
//! let matcher = Matcher::new(Catalog::load("config/combinations.yaml")?);
//! let classification = matcher.classify(&legs);
//! println!("{} {:?}", classification.name, classification.order);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Core classification logic.
pub mod domain;

/// Configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// Domain re-exports
pub use domain::combination::{
    Catalog, CatalogError, Classification, CombinationTemplate, Matcher, UNCLASSIFIED,
};
pub use domain::position::{InstrumentType, Leg};
