//! Bit-level randomness boundary.

use rand::Rng;

/// An external source of uniform random bits.
///
/// One call yields one unsigned integer in `[0, 2^bits)`. Implementations
/// may be backed by anything from a seeded PRNG to quantum hardware; the
/// sampler tolerates any in-range value, including repeats.
pub trait BitSource {
    /// Draws a uniform value in `[0, 2^bits)`. `bits` is at most 63.
    fn draw_bits(&mut self, bits: u32) -> u64;
}

/// [`BitSource`] adapter over any [`rand::Rng`].
///
/// # Examples
///
/// ```
/// use hamiltour::sampling::{BitSource, RandomBits};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut source = RandomBits::new(StdRng::seed_from_u64(7));
/// let v = source.draw_bits(3);
/// assert!(v < 8);
/// ```
pub struct RandomBits<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBits<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BitSource for RandomBits<R> {
    fn draw_bits(&mut self, bits: u32) -> u64 {
        debug_assert!(bits < 64);
        self.rng.random_range(0..(1u64 << bits))
    }
}

/// Number of bits needed to represent every index in `[0, universe)`.
///
/// Zero for a single-element universe (the only index is 0).
pub fn bits_for(universe: usize) -> u32 {
    if universe <= 1 {
        0
    } else {
        usize::BITS - (universe - 1).leading_zeros()
    }
}
