//! Per-cycle cost aggregation.
//!
//! Each enumerated cycle is paired with its own total cost at the moment
//! it is scored, keyed by the cycle's canonical string form. Two distinct
//! cycles with equal cost stay two distinct entries.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::distance::CostMatrix;

/// Canonical string form of a cycle: space-joined vertex indices with the
/// closing return to the anchor appended.
///
/// # Examples
///
/// ```
/// use hamiltour::cost::cycle_key;
///
/// assert_eq!(cycle_key(&[0, 2, 1]), "0 2 1 0");
/// ```
pub fn cycle_key(cycle: &[usize]) -> String {
    let mut key = String::new();
    for &v in cycle {
        key.push_str(&v.to_string());
        key.push(' ');
    }
    if let Some(&first) = cycle.first() {
        key.push_str(&first.to_string());
    }
    key
}

/// Total cost of a closed tour: every consecutive edge plus the closing
/// edge back to the first vertex.
///
/// # Examples
///
/// ```
/// use hamiltour::distance::CostMatrix;
/// use hamiltour::cost::cycle_cost;
///
/// let m = CostMatrix::from_data(3, vec![
///     0.0, 1.0, 3.0,
///     1.0, 0.0, 2.0,
///     3.0, 2.0, 0.0,
/// ]).unwrap();
/// assert_eq!(cycle_cost(&m, &[0, 1, 2]), 6.0);
/// ```
pub fn cycle_cost(matrix: &CostMatrix, cycle: &[usize]) -> f64 {
    let mut total = 0.0;
    for pair in cycle.windows(2) {
        total += matrix.get(pair[0], pair[1]);
    }
    if cycle.len() > 1 {
        total += matrix.get(cycle[cycle.len() - 1], cycle[0]);
    }
    total
}

/// Ordered index from canonical cycle key to that cycle's total cost.
///
/// Keys are unique by construction (the enumerator visits each anchored
/// permutation once) and iterate in lexicographic key order, so repeated
/// aggregation over the same input yields an identical index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CycleCosts {
    entries: BTreeMap<String, f64>,
}

impl CycleCosts {
    /// Cost of the given cycle key, if that cycle was enumerated.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.get(key).copied()
    }

    /// Number of indexed cycles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no Hamiltonian cycle was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl IntoIterator for CycleCosts {
    type Item = (String, f64);
    type IntoIter = btree_map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Scores every enumerated cycle against the matrix it was found in.
///
/// The cost is computed and stored alongside its cycle in one pass, so
/// equal-cost cycles can never swap entries.
///
/// # Examples
///
/// ```
/// use hamiltour::distance::CostMatrix;
/// use hamiltour::enumeration::{enumerate_cycles, MirrorPolicy};
/// use hamiltour::cost::aggregate_costs;
///
/// let m = CostMatrix::from_data(3, vec![
///     0.0, 1.0, 3.0,
///     1.0, 0.0, 2.0,
///     3.0, 2.0, 0.0,
/// ]).unwrap();
/// let cycles = enumerate_cycles(&m, MirrorPolicy::KeepBoth);
/// let costs = aggregate_costs(&m, &cycles);
///
/// assert_eq!(costs.len(), 2);
/// assert_eq!(costs.get("0 1 2 0"), Some(6.0));
/// assert_eq!(costs.get("0 2 1 0"), Some(6.0));
/// ```
pub fn aggregate_costs(matrix: &CostMatrix, cycles: &[Vec<usize>]) -> CycleCosts {
    let mut entries = BTreeMap::new();
    for cycle in cycles {
        entries.insert(cycle_key(cycle), cycle_cost(matrix, cycle));
    }
    CycleCosts { entries }
}
