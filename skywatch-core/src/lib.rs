//! Core library for the `skywatch` weather dashboard.
//!
//! This crate defines:
//! - The unified [`WeatherSnapshot`] view model
//! - Position resolution over an abstract host capability
//! - The aggregator merging three upstream services into one snapshot
//! - The three-state session result the presentation layer consumes
//!
//! It is used by `skywatch-cli`, but can also be reused by other binaries.

pub mod aggregator;
pub mod error;
pub mod location;
pub mod model;
pub mod session;

pub use aggregator::{AggregatorConfig, WeatherAggregator};
pub use error::SkywatchError;
pub use location::{PositionSource, StaticPositionSource, SystemPositionSource};
pub use model::{Coordinate, WeatherSnapshot};
pub use session::{SessionState, run_session};
