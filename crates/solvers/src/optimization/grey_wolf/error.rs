use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur when building or running a grey wolf search.
///
/// Every error ends the current run and is returned to the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bounds [{min}, {max}]: both must be finite with min <= max")]
    InvalidBounds { min: f64, max: f64 },

    #[error(
        "population size and iteration count must be positive \
         (got population_size = {population_size}, iterations = {iterations})"
    )]
    InvalidPopulation {
        population_size: usize,
        iterations: usize,
    },

    #[error("candidate has {actual} coordinates but the search space has {expected} dimensions")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("candidate index {index} is out of range for a population of {population_size}")]
    CandidateIndex {
        index: usize,
        population_size: usize,
    },

    #[error("objective evaluation failed")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),

    #[error("no comparable objective value was seen, so there is no best candidate")]
    NoLeader,
}
