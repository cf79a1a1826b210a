//! Exhaustive Hamiltonian cycle enumeration.
//!
//! # Algorithm
//!
//! Depth-first backtracking over the graph implied by the cost matrix
//! (edge iff positive weight). The path starts as `[0]`, anchoring every
//! cycle at vertex 0 and eliminating its k rotations; at each depth every
//! unvisited neighbor of the path tail is tried in ascending vertex order,
//! so the output order is lexicographic and deterministic. When the path
//! covers all vertices, the cycle is emitted iff the closing edge back to
//! vertex 0 exists.
//!
//! Anchoring does not eliminate the mirror image of a cycle; whether both
//! traversal directions are kept is a [`MirrorPolicy`] choice.
//!
//! # Complexity
//!
//! O(k!) worst case; a complete graph yields (k-1)! anchored cycles.
//! Intended for single-digit k.

mod parallel;
mod search;

pub use parallel::enumerate_cycles_parallel;
pub use search::{enumerate_cycles, MirrorPolicy};
