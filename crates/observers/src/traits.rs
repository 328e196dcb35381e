//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written against them keeps working as solvers are added.
//!
//! # Event traits
//!
//! - [`HasObjective`]: events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//! - [`CanAssumeWorse`]: actions that can exclude an evaluation
//!
//! # Example
//!
//! ```rust
//! use wolfpack_core::Observer;
//! use wolfpack_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct AfterEvaluations {
//!     limit: usize,
//!     seen: usize,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for AfterEvaluations {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.objective().is_finite() {
//!             self.seen += 1;
//!         }
//!         (self.seen >= self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use wolfpack_core::Objective;
use wolfpack_solvers::optimization::grey_wolf;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than any other.
    fn assume_worse() -> Self;
}

// --- HasObjective for grey_wolf::Event ---

impl<O: Objective> HasObjective for grey_wolf::Event<'_, O> {
    fn objective(&self) -> f64 {
        match self {
            grey_wolf::Event::Evaluated { objective, .. } => *objective,
            grey_wolf::Event::IterationCompleted { best_objective, .. } => *best_objective,
            grey_wolf::Event::ObjectiveFailed { .. } => f64::NAN,
        }
    }
}

// --- Action impls ---

impl CanStopEarly for grey_wolf::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for grey_wolf::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}
