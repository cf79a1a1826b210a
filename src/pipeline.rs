//! End-to-end tour costing pipeline.

use log::debug;

use crate::cost::{aggregate_costs, CycleCosts};
use crate::distance::CostMatrix;
use crate::enumeration::{enumerate_cycles, MirrorPolicy};
use crate::error::Result;
use crate::models::Location;
use crate::sampling::{sample_events, BitSource};

/// Samples `k` events from the universe, builds their haversine cost
/// matrix, enumerates every Hamiltonian cycle anchored at the first
/// sampled event, and returns the cycle/cost index.
///
/// The call is atomic: either the full index is returned or an error is,
/// never a partial result. An empty index means the sampled graph admits
/// no closed tour (only possible with fewer than 3 events here, since
/// haversine matrices over non-coincident points are complete graphs).
///
/// Enumeration runs single-threaded; callers wanting bounded latency
/// should cap `k` before calling rather than expect cancellation
/// mid-search.
///
/// # Errors
///
/// See [`sample_events`] and [`CostMatrix::from_locations`]; no new error
/// conditions are added at this layer.
///
/// # Examples
///
/// ```
/// use hamiltour::build_cycle_costs;
/// use hamiltour::enumeration::MirrorPolicy;
/// use hamiltour::models::Location;
/// use hamiltour::sampling::RandomBits;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let universe = vec![
///     Location::new(0, "a", 0.0, 0.0).unwrap(),
///     Location::new(1, "b", 0.0, 1.0).unwrap(),
///     Location::new(2, "c", 1.0, 0.0).unwrap(),
///     Location::new(3, "d", 1.0, 1.0).unwrap(),
/// ];
/// let mut source = RandomBits::new(StdRng::seed_from_u64(11));
///
/// let costs = build_cycle_costs(&universe, 4, &mut source, MirrorPolicy::KeepBoth).unwrap();
/// assert_eq!(costs.len(), 6); // complete K4: (4-1)! anchored tours
/// ```
pub fn build_cycle_costs(
    universe: &[Location],
    k: usize,
    source: &mut dyn BitSource,
    policy: MirrorPolicy,
) -> Result<CycleCosts> {
    let selected = sample_events(universe.len(), k, source)?;
    debug!("selected events: {selected:?}");

    let events: Vec<Location> = selected.iter().map(|&i| universe[i].clone()).collect();
    let matrix = CostMatrix::from_locations(&events)?;

    let cycles = enumerate_cycles(&matrix, policy);
    debug!("enumerated {} cycles over {} events", cycles.len(), k);

    Ok(aggregate_costs(&matrix, &cycles))
}
