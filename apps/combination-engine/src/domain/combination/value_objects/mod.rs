//! Combination Template Value Objects

mod cardinality;
mod combination_template;
mod expiration_spec;
mod leg_template;
mod ratio_spec;
mod strike_spec;
mod tie_group;

pub use cardinality::Cardinality;
pub use combination_template::CombinationTemplate;
pub use expiration_spec::{CalendarDelta, CalendarUnit, ExpirationSpec};
pub use leg_template::LegTemplate;
pub use ratio_spec::{RatioSign, RatioSpec};
pub use strike_spec::StrikeSpec;
pub use tie_group::TieGroup;
