//! Domain model types.
//!
//! Provides the event location record consumed by the distance and sampling
//! layers. The location universe is fixed at load time and never mutated.

mod location;

pub use location::Location;
