//! # hamiltour
//!
//! Enumerates every closed tour (Hamiltonian cycle) over a randomly sampled
//! subset of geographic events, mapping each tour to its total great-circle
//! travel cost.
//!
//! The pipeline runs in four stages: sample a subset of event indices from
//! an injected bit-level randomness source, build the symmetric haversine
//! cost matrix for the selection, enumerate all Hamiltonian cycles anchored
//! at vertex 0 by depth-first backtracking, and aggregate each cycle's total
//! cost into an ordered index.
//!
//! ## Modules
//!
//! - [`models`] — Event location record (id, name, coordinates)
//! - [`distance`] — Haversine distance and the symmetric cost matrix
//! - [`sampling`] — Random event selection over a bit-source boundary
//! - [`enumeration`] — Backtracking Hamiltonian cycle search
//! - [`cost`] — Per-cycle cost aggregation and the cycle/cost index
//! - [`io`] — CSV location loading
//!
//! ## Example
//!
//! ```
//! use hamiltour::distance::CostMatrix;
//! use hamiltour::enumeration::{enumerate_cycles, MirrorPolicy};
//! use hamiltour::cost::aggregate_costs;
//!
//! // Complete graph on 4 vertices with unit weights.
//! let matrix = CostMatrix::from_data(4, vec![
//!     0.0, 1.0, 1.0, 1.0,
//!     1.0, 0.0, 1.0, 1.0,
//!     1.0, 1.0, 0.0, 1.0,
//!     1.0, 1.0, 1.0, 0.0,
//! ]).unwrap();
//!
//! let cycles = enumerate_cycles(&matrix, MirrorPolicy::KeepBoth);
//! assert_eq!(cycles.len(), 6); // (4-1)! anchored cycles
//!
//! let costs = aggregate_costs(&matrix, &cycles);
//! assert_eq!(costs.get("0 1 2 3 0"), Some(4.0));
//! ```

pub mod cost;
pub mod distance;
pub mod enumeration;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod sampling;

pub use error::{Error, Result};
pub use pipeline::build_cycle_costs;
