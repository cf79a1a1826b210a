//! Property-based tests over random coordinate sets and adjacency graphs.

use proptest::prelude::*;

use hamiltour::cost::{aggregate_costs, cycle_cost, cycle_key};
use hamiltour::distance::CostMatrix;
use hamiltour::enumeration::{enumerate_cycles, enumerate_cycles_parallel, MirrorPolicy};
use hamiltour::models::Location;

fn coordinates() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-80.0..80.0f64, -179.0..179.0f64), 2..7)
}

/// Random symmetric adjacency: k plus the strict upper triangle as bits.
fn adjacency() -> impl Strategy<Value = (usize, Vec<bool>)> {
    (3usize..=6).prop_flat_map(|k| {
        (
            Just(k),
            prop::collection::vec(any::<bool>(), k * (k - 1) / 2),
        )
    })
}

fn matrix_from_bits(k: usize, bits: &[bool]) -> CostMatrix {
    let mut data = vec![0.0; k * k];
    let mut next = 0;
    for i in 0..k {
        for j in (i + 1)..k {
            let w = if bits[next] { 1.0 } else { 0.0 };
            data[i * k + j] = w;
            data[j * k + i] = w;
            next += 1;
        }
    }
    CostMatrix::from_data(k, data).expect("square grid")
}

fn assert_valid_cycle(matrix: &CostMatrix, cycle: &[usize]) {
    let k = matrix.size();
    assert_eq!(cycle.len(), k);
    assert_eq!(cycle[0], 0);
    let mut seen = vec![false; k];
    for &v in cycle {
        assert!(v < k && !seen[v]);
        seen[v] = true;
    }
    for pair in cycle.windows(2) {
        assert!(matrix.has_edge(pair[0], pair[1]));
    }
    assert!(matrix.has_edge(cycle[k - 1], cycle[0]));
}

proptest! {
    #[test]
    fn haversine_matrix_is_symmetric_with_zero_diagonal(coords in coordinates()) {
        let events: Vec<Location> = coords
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon))| Location::new(i, format!("e{i}"), lat, lon).expect("in range"))
            .collect();
        // Random floats virtually never coincide; skip the case if they do.
        let matrix = match CostMatrix::from_locations(&events) {
            Ok(m) => m,
            Err(_) => return Ok(()),
        };

        prop_assert!(matrix.is_symmetric(1e-9));
        for i in 0..matrix.size() {
            prop_assert_eq!(matrix.get(i, i), 0.0);
            for j in 0..matrix.size() {
                prop_assert!(matrix.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn emitted_cycles_are_valid_and_unique((k, bits) in adjacency()) {
        let matrix = matrix_from_bits(k, &bits);
        let cycles = enumerate_cycles(&matrix, MirrorPolicy::KeepBoth);

        for cycle in &cycles {
            assert_valid_cycle(&matrix, cycle);
        }
        let mut deduped = cycles.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), cycles.len());
    }

    #[test]
    fn collapse_keeps_one_per_mirror_pair((k, bits) in adjacency()) {
        let matrix = matrix_from_bits(k, &bits);
        let both = enumerate_cycles(&matrix, MirrorPolicy::KeepBoth);
        let collapsed = enumerate_cycles(&matrix, MirrorPolicy::Collapse);

        // With at least 3 vertices a cycle never equals its own mirror, so
        // the raw enumeration pairs up exactly.
        prop_assert_eq!(both.len(), collapsed.len() * 2);
        for cycle in &collapsed {
            let mut mirror = cycle.clone();
            mirror[1..].reverse();
            prop_assert!(both.contains(cycle));
            prop_assert!(both.contains(&mirror));
        }
    }

    #[test]
    fn parallel_enumeration_matches_sequential((k, bits) in adjacency()) {
        let matrix = matrix_from_bits(k, &bits);
        for policy in [MirrorPolicy::KeepBoth, MirrorPolicy::Collapse] {
            prop_assert_eq!(
                enumerate_cycles_parallel(&matrix, policy),
                enumerate_cycles(&matrix, policy)
            );
        }
    }

    #[test]
    fn aggregation_pairs_each_cycle_with_its_own_cost((k, bits) in adjacency()) {
        let matrix = matrix_from_bits(k, &bits);
        let cycles = enumerate_cycles(&matrix, MirrorPolicy::KeepBoth);
        let costs = aggregate_costs(&matrix, &cycles);

        prop_assert_eq!(costs.len(), cycles.len());
        for cycle in &cycles {
            prop_assert_eq!(costs.get(&cycle_key(cycle)), Some(cycle_cost(&matrix, cycle)));
        }
    }
}
