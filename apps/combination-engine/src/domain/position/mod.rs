//! Position Bounded Context
//!
//! The legs handed to classification. Legs are built by market-data and
//! position aggregation elsewhere and are read-only here.

mod instrument_type;
mod leg;

pub use instrument_type::InstrumentType;
pub use leg::Leg;
