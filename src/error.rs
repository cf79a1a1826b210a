//! Crate error types.

use thiserror::Error as ThisError;

/// Errors produced by sampling, matrix construction, and loading.
///
/// An empty enumeration result ("no Hamiltonian cycle exists") is not an
/// error; it is reported as an empty [`CycleCosts`](crate::cost::CycleCosts).
#[derive(Debug, ThisError)]
pub enum Error {
    /// A size or coordinate argument was unusable (e.g. zero sample size).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// More events were requested than the universe holds.
    #[error("requested {requested} events but the universe holds only {available}")]
    InsufficientUniverse { requested: usize, available: usize },

    /// The randomness source failed to produce enough distinct valid
    /// indices within the retry budget.
    #[error("randomness source could not produce {requested} distinct indices within {budget} draws")]
    SamplingExhausted { requested: usize, budget: usize },

    /// Two distinct selected locations have zero great-circle distance.
    /// Edge weights must be strictly positive between distinct vertices,
    /// since a zero weight means "no edge" to the enumerator.
    #[error("locations {a} and {b} are coincident; distinct events need a positive distance")]
    CoincidentLocations { a: usize, b: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
