//! Widget implementations for the Arcus gauge library.

pub mod gauge;

pub use gauge::{Gauge, GaugeConfigError};
