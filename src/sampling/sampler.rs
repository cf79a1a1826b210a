//! Rejection sampling of distinct event indices.

use log::debug;

use crate::error::{Error, Result};

use super::{bits_for, BitSource};

/// Retry budget multiplier: at most `SAMPLE_RETRY_FACTOR * k` draws are
/// spent selecting `k` events.
///
/// The bit width covers the universe size, so a uniform source wastes at
/// most half its draws on out-of-range values; the budget is generous for
/// any source that is actually producing fresh values.
pub const SAMPLE_RETRY_FACTOR: usize = 64;

/// Selects `k` distinct indices from `[0, universe)` uniformly at random.
///
/// Indices are returned in draw order. Out-of-range draws and repeats are
/// rejected and redrawn; a source that keeps failing to produce fresh
/// in-range values trips [`Error::SamplingExhausted`] instead of looping
/// forever.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if `k == 0` or the universe is empty
/// - [`Error::InsufficientUniverse`] if `k > universe`
/// - [`Error::SamplingExhausted`] once the retry budget is spent
///
/// # Examples
///
/// ```
/// use hamiltour::sampling::{sample_events, RandomBits};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut source = RandomBits::new(StdRng::seed_from_u64(1));
/// let picked = sample_events(10, 4, &mut source).unwrap();
/// assert_eq!(picked.len(), 4);
/// assert!(picked.iter().all(|&i| i < 10));
/// ```
pub fn sample_events(universe: usize, k: usize, source: &mut dyn BitSource) -> Result<Vec<usize>> {
    if universe == 0 {
        return Err(Error::invalid_input("cannot sample from an empty universe"));
    }
    if k == 0 {
        return Err(Error::invalid_input("sample size must be at least 1"));
    }
    if k > universe {
        return Err(Error::InsufficientUniverse {
            requested: k,
            available: universe,
        });
    }

    let bits = bits_for(universe);
    let budget = SAMPLE_RETRY_FACTOR * k;
    let mut taken = vec![false; universe];
    let mut selected = Vec::with_capacity(k);
    let mut draws = 0usize;

    while selected.len() < k {
        if draws == budget {
            return Err(Error::SamplingExhausted {
                requested: k,
                budget,
            });
        }
        draws += 1;

        let raw = source.draw_bits(bits) as usize;
        if raw >= universe || taken[raw] {
            continue;
        }
        taken[raw] = true;
        selected.push(raw);
    }

    debug!("sampled {k} of {universe} events in {draws} draws");
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::RandomBits;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Source that returns the same value on every draw.
    struct Constant(u64);

    impl BitSource for Constant {
        fn draw_bits(&mut self, _bits: u32) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_distinct_and_in_range() {
        let mut source = RandomBits::new(StdRng::seed_from_u64(99));
        let picked = sample_events(12, 5, &mut source).expect("sampling succeeds");
        assert_eq!(picked.len(), 5);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 5, "indices must be distinct");
        assert!(picked.iter().all(|&i| i < 12));
    }

    #[test]
    fn test_full_universe() {
        let mut source = RandomBits::new(StdRng::seed_from_u64(3));
        let picked = sample_events(6, 6, &mut source).expect("sampling succeeds");
        let mut sorted = picked;
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_zero_sample_size() {
        let mut source = Constant(0);
        assert!(matches!(
            sample_events(4, 0, &mut source),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_universe() {
        let mut source = Constant(0);
        assert!(matches!(
            sample_events(0, 1, &mut source),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_insufficient_universe() {
        let mut source = Constant(0);
        let err = sample_events(4, 6, &mut source).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientUniverse {
                requested: 6,
                available: 4
            }
        ));
    }

    #[test]
    fn test_constant_source_exhausts() {
        // A source stuck on one value can never yield a second distinct index.
        let mut source = Constant(2);
        let err = sample_events(8, 3, &mut source).unwrap_err();
        assert!(matches!(err, Error::SamplingExhausted { requested: 3, .. }));
    }

    #[test]
    fn test_out_of_range_source_exhausts() {
        // Universe 5 needs 3 bits; 7 is always out of range.
        let mut source = Constant(7);
        let err = sample_events(5, 1, &mut source).unwrap_err();
        assert!(matches!(err, Error::SamplingExhausted { requested: 1, .. }));
    }

    #[test]
    fn test_single_element_universe() {
        let mut source = Constant(0);
        assert_eq!(sample_events(1, 1, &mut source).expect("valid"), vec![0]);
    }
}
