//! Grey wolf optimizer for bounded multi-dimensional search.
//!
//! # Algorithm
//!
//! A population ("pack") of candidates is sampled uniformly from an
//! axis-aligned box. Each iteration:
//!
//! 1. Every candidate is moved back into the box (out-of-range coordinates
//!    are resampled, not projected), evaluated, and offered in population
//!    order to three leader slots: alpha, beta, and delta.
//! 2. The convergence coefficient `a` falls linearly from 2 toward 0.
//! 3. Every coordinate of every candidate moves to the mean of three pulls,
//!    one toward each leader, each with fresh random draws from that
//!    coordinate's dimension.
//!
//! Leader scores persist for the whole run, so alpha is always the best
//! candidate seen so far. The run ends after the configured number of
//! iterations; there is no convergence tolerance.
//!
//! # Leader selection
//!
//! Leaders are chosen by a single forward scan with strict guards, not by
//! sorting. A score equal to the alpha or beta score fills no slot, and a
//! candidate that displaces beta does not push the old beta down to delta.
//! The three leaders are therefore not always the true top three.
//!
//! # Randomness
//!
//! Each [`BoundedDimension`] owns its random stream. Sampling and the
//! position update for coordinate `j` draw only from dimension `j`'s stream.
//! [`Config::with_seed`] makes a run reproducible.
//!
//! # Observer Events
//!
//! The solver emits an [`Event::Evaluated`] or [`Event::ObjectiveFailed`]
//! for every evaluation and an [`Event::IterationCompleted`] after every move.
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to keep a candidate out of leader selection
//! (recovering from objective errors, or steering away from a region).

mod action;
mod candidate;
mod config;
mod dimension;
mod error;
mod event;
mod leaders;
mod search;
mod solution;
mod space;


pub use action::Action;
pub use candidate::Candidate;
pub use config::Config;
pub use dimension::BoundedDimension;
pub use error::Error;
pub use event::Event;
pub use search::convergence_coefficient;
pub use solution::{Solution, Status};
pub use space::SearchSpace;

use wolfpack_core::{Objective, Observer};

use crate::optimization::{Maximize, Minimize};

use search::search;

/// A grey wolf search over one [`SearchSpace`].
///
/// The optimizer owns the space, the population, and the configuration. The
/// population persists between runs, so a second call to [`minimize`] picks
/// up where the first left the pack; leaders always start empty.
///
/// [`minimize`]: Optimizer::minimize
#[derive(Debug)]
pub struct Optimizer {
    space: SearchSpace,
    population: Vec<Candidate>,
    config: Config,
}

impl Optimizer {
    /// Samples an initial population from `space`.
    ///
    /// When the config carries a seed, every dimension's stream is restarted
    /// from it first, so the run does not depend on how `space` was seeded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if a sampled candidate does not
    /// fit the space.
    pub fn new(mut space: SearchSpace, config: &Config) -> Result<Self, Error> {
        if let Some(seed) = config.seed() {
            space.reseed(seed);
        }

        let population = (0..config.population_size())
            .map(|_| -> Result<Candidate, Error> {
                let mut candidate = Candidate::sample(&mut space);
                candidate.clamp_to_space(&mut space)?;
                Ok(candidate)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            space,
            population,
            config: *config,
        })
    }

    /// Builds the space from `[min, max]` pairs and samples a population.
    ///
    /// The space is seeded from [`Config::seed`] when one is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if any pair has `min > max` or a
    /// non-finite bound.
    pub fn from_bounds(bounds: &[[f64; 2]], config: &Config) -> Result<Self, Error> {
        let space = match config.seed() {
            Some(seed) => SearchSpace::seeded(bounds, seed)?,
            None => SearchSpace::new(bounds)?,
        };
        Self::new(space, config)
    }

    /// Returns the search space.
    #[must_use]
    pub fn space(&self) -> &SearchSpace {
        &self.space
    }

    /// Returns the current population, in scan order.
    #[must_use]
    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces candidate `index` with `coordinates`, returning the old one.
    ///
    /// Useful for seeding the pack with known good positions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CandidateIndex`] if `index` is not less than the
    /// population size, or [`Error::DimensionMismatch`] if `coordinates` does
    /// not have one entry per dimension.
    pub fn replace_candidate(
        &mut self,
        index: usize,
        coordinates: Vec<f64>,
    ) -> Result<Candidate, Error> {
        let population_size = self.population.len();
        let slot = self
            .population
            .get_mut(index)
            .ok_or(Error::CandidateIndex {
                index,
                population_size,
            })?;
        let candidate = Candidate::new(coordinates, &self.space)?;
        Ok(std::mem::replace(slot, candidate))
    }

    /// Finds the minimum of the objective.
    ///
    /// The observer receives an [`Event`] for each evaluation and iteration.
    /// See the [module docs](self) for details on observer actions.
    ///
    /// # Errors
    ///
    /// Returns an error if the objective fails and the observer does not
    /// return [`Action::AssumeWorse`] to recover, or if no comparable objective
    /// value was seen.
    pub fn minimize<O, Obs>(&mut self, objective: &O, observer: Obs) -> Result<Solution, Error>
    where
        O: Objective,
        Obs: for<'a> Observer<Event<'a, O>, Action>,
    {
        search::<Minimize, _, _>(
            &mut self.space,
            &mut self.population,
            &self.config,
            objective,
            observer,
        )
    }

    /// Finds the minimum of the objective without observer support.
    ///
    /// # Errors
    ///
    /// Returns an error if the objective fails or never yields a comparable value.
    pub fn minimize_unobserved<O: Objective>(&mut self, objective: &O) -> Result<Solution, Error> {
        self.minimize(objective, ())
    }

    /// Finds the maximum of the objective.
    ///
    /// Runs the same search as [`Optimizer::minimize`] on the negated
    /// objective. Events and the returned solution report the objective as
    /// the caller defined it.
    ///
    /// # Errors
    ///
    /// Returns an error if the objective fails and the observer does not
    /// return [`Action::AssumeWorse`] to recover, or if no comparable objective
    /// value was seen.
    pub fn maximize<O, Obs>(&mut self, objective: &O, observer: Obs) -> Result<Solution, Error>
    where
        O: Objective,
        Obs: for<'a> Observer<Event<'a, O>, Action>,
    {
        search::<Maximize, _, _>(
            &mut self.space,
            &mut self.population,
            &self.config,
            objective,
            observer,
        )
    }

    /// Finds the maximum of the objective without observer support.
    ///
    /// # Errors
    ///
    /// Returns an error if the objective fails or never yields a comparable value.
    pub fn maximize_unobserved<O: Objective>(&mut self, objective: &O) -> Result<Solution, Error> {
        self.maximize(objective, ())
    }
}
