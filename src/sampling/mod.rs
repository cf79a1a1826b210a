//! Random event selection.
//!
//! The randomness capability is an external collaborator that hands back a
//! raw unsigned integer of a requested bit width per call, modelled by the
//! [`BitSource`] trait. The sampler turns that raw stream into a set of
//! distinct in-range universe indices by rejection: out-of-range values and
//! repeats are discarded and redrawn, within a finite budget.

mod sampler;
mod source;

pub use sampler::{sample_events, SAMPLE_RETRY_FACTOR};
pub use source::{bits_for, BitSource, RandomBits};
