//! Sequential backtracking search.

use crate::distance::CostMatrix;

/// Whether a cycle and its reverse traversal count as one tour or two.
///
/// A closed tour read backwards visits the same edges at the same total
/// cost, so callers who think of tours as undirected routes want one entry
/// per direction pair; callers mirroring the raw search space want both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorPolicy {
    /// Emit both traversal directions as separate cycles.
    KeepBoth,
    /// Emit only the direction whose second vertex is smaller than its
    /// last, collapsing each mirror pair to one representative.
    Collapse,
}

/// Enumerates every Hamiltonian cycle of the matrix's implied graph,
/// anchored at vertex 0.
///
/// Each cycle is a permutation of `0..k` starting with 0; the closing edge
/// back to vertex 0 is implicit. Cycles are returned in lexicographic
/// order. An empty result means the graph admits no Hamiltonian cycle,
/// which is a normal outcome, not a failure.
///
/// Graphs with fewer than 3 vertices have no cycles: a closed tour needs
/// at least three distinct stops (a 2-vertex "tour" would traverse the
/// same edge twice).
///
/// # Examples
///
/// ```
/// use hamiltour::distance::CostMatrix;
/// use hamiltour::enumeration::{enumerate_cycles, MirrorPolicy};
///
/// // Triangle graph.
/// let m = CostMatrix::from_data(3, vec![
///     0.0, 1.0, 1.0,
///     1.0, 0.0, 1.0,
///     1.0, 1.0, 0.0,
/// ]).unwrap();
///
/// let cycles = enumerate_cycles(&m, MirrorPolicy::KeepBoth);
/// assert_eq!(cycles, vec![vec![0, 1, 2], vec![0, 2, 1]]);
///
/// let collapsed = enumerate_cycles(&m, MirrorPolicy::Collapse);
/// assert_eq!(collapsed, vec![vec![0, 1, 2]]);
/// ```
pub fn enumerate_cycles(matrix: &CostMatrix, policy: MirrorPolicy) -> Vec<Vec<usize>> {
    let k = matrix.size();
    if k < 3 {
        return Vec::new();
    }

    let mut path = Vec::with_capacity(k);
    path.push(0);
    let mut visited = vec![false; k];
    visited[0] = true;

    let mut cycles = Vec::new();
    extend(matrix, policy, &mut path, &mut visited, &mut cycles);
    cycles
}

/// Extends the current path by every viable vertex, emitting completed
/// cycles into `out` and backtracking after each attempt.
///
/// Shared with the parallel enumerator, which seeds `path` with its
/// top-level branch before calling.
pub(super) fn extend(
    matrix: &CostMatrix,
    policy: MirrorPolicy,
    path: &mut Vec<usize>,
    visited: &mut [bool],
    out: &mut Vec<Vec<usize>>,
) {
    let k = matrix.size();
    if path.len() == k {
        if matrix.has_edge(path[k - 1], path[0]) && keep(policy, path) {
            out.push(path.clone());
        }
        return;
    }

    let tail = path[path.len() - 1];
    for v in 0..k {
        if !visited[v] && matrix.has_edge(tail, v) {
            path.push(v);
            visited[v] = true;
            extend(matrix, policy, path, visited, out);
            visited[v] = false;
            path.pop();
        }
    }
}

fn keep(policy: MirrorPolicy, path: &[usize]) -> bool {
    match policy {
        MirrorPolicy::KeepBoth => true,
        MirrorPolicy::Collapse => path[1] < path[path.len() - 1],
    }
}
