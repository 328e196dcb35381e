//! Convergence history of a grey wolf search.

use wolfpack_core::{Objective, Observer};
use wolfpack_solvers::optimization::grey_wolf::Event;

/// Records the best objective after each iteration.
///
/// Pass `&mut History` to the optimizer so the record is still available
/// after the search returns.
///
/// ```rust
/// use wolfpack_observers::History;
/// use wolfpack_solvers::optimization::grey_wolf::{Config, Optimizer};
///
/// let config = Config::new(20, 30)?.with_seed(1);
/// let mut optimizer = Optimizer::from_bounds(&[[-5.0, 5.0]; 2], &config)?;
/// let mut history = History::new();
///
/// optimizer.minimize(&|x: &[f64]| x[0] * x[0] + x[1] * x[1], &mut history)?;
///
/// assert_eq!(history.len(), 30);
/// assert_eq!(history.evaluations(), 20 * 30);
/// # Ok::<(), wolfpack_solvers::optimization::grey_wolf::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    best: Vec<f64>,
    evaluations: usize,
    failures: usize,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best objective after each completed iteration, in order.
    #[must_use]
    pub fn best_objectives(&self) -> &[f64] {
        &self.best
    }

    /// Best objective after the last completed iteration.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.best.last().copied()
    }

    /// Number of completed iterations recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Number of successful objective evaluations seen.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Number of failed objective evaluations seen.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Absolute improvement of the best objective over the last `window`
    /// iterations.
    ///
    /// Returns `None` until more than `window` iterations are recorded.
    #[must_use]
    pub fn improvement(&self, window: usize) -> Option<f64> {
        let n = self.best.len();
        if n <= window {
            return None;
        }
        Some((self.best[n - 1] - self.best[n - 1 - window]).abs())
    }
}

impl<O: Objective, A> Observer<Event<'_, O>, A> for History {
    fn observe(&mut self, event: &Event<'_, O>) -> Option<A> {
        match event {
            Event::Evaluated { .. } => self.evaluations += 1,
            Event::ObjectiveFailed { .. } => self.failures += 1,
            Event::IterationCompleted { best_objective, .. } => self.best.push(*best_objective),
        }
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the history can be read after the search completes.
impl<O: Objective, A> Observer<Event<'_, O>, A> for &mut History {
    fn observe(&mut self, event: &Event<'_, O>) -> Option<A> {
        Observer::<Event<'_, O>, A>::observe(&mut **self, event)
    }
}
