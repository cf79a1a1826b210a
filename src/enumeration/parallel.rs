//! Parallel fan-out over top-level search branches.
//!
//! The choice of second vertex partitions the search space into disjoint
//! subtrees, so each branch can run on its own scoped thread with no shared
//! mutable state. Workers stream their branch results through a channel;
//! the merged output is re-sorted by branch so the cycle order matches the
//! sequential enumerator exactly.

use crossbeam_channel::unbounded;

use crate::distance::CostMatrix;

use super::search::{extend, MirrorPolicy};

/// Enumerates Hamiltonian cycles with one worker thread per top-level
/// branch.
///
/// Produces the same cycles in the same order as
/// [`enumerate_cycles`](super::enumerate_cycles); useful when k is at the
/// upper end of the practical range and the search tree is wide.
///
/// # Examples
///
/// ```
/// use hamiltour::distance::CostMatrix;
/// use hamiltour::enumeration::{enumerate_cycles, enumerate_cycles_parallel, MirrorPolicy};
///
/// let m = CostMatrix::from_data(4, vec![
///     0.0, 1.0, 1.0, 1.0,
///     1.0, 0.0, 1.0, 1.0,
///     1.0, 1.0, 0.0, 1.0,
///     1.0, 1.0, 1.0, 0.0,
/// ]).unwrap();
///
/// assert_eq!(
///     enumerate_cycles_parallel(&m, MirrorPolicy::KeepBoth),
///     enumerate_cycles(&m, MirrorPolicy::KeepBoth),
/// );
/// ```
pub fn enumerate_cycles_parallel(matrix: &CostMatrix, policy: MirrorPolicy) -> Vec<Vec<usize>> {
    let k = matrix.size();
    if k < 3 {
        return Vec::new();
    }

    let (tx, rx) = unbounded();
    std::thread::scope(|scope| {
        for branch in 1..k {
            if !matrix.has_edge(0, branch) {
                continue;
            }
            let tx = tx.clone();
            scope.spawn(move || {
                let mut path = Vec::with_capacity(k);
                path.push(0);
                path.push(branch);
                let mut visited = vec![false; k];
                visited[0] = true;
                visited[branch] = true;

                let mut found = Vec::new();
                extend(matrix, policy, &mut path, &mut visited, &mut found);
                let _ = tx.send((branch, found));
            });
        }
        drop(tx);
    });

    let mut branches: Vec<(usize, Vec<Vec<usize>>)> = rx.iter().collect();
    branches.sort_unstable_by_key(|&(branch, _)| branch);
    branches.into_iter().flat_map(|(_, found)| found).collect()
}
