//! Structured logging of grey wolf search progress.

use tracing::{debug, info, trace, warn};
use wolfpack_core::{Objective, Observer};
use wolfpack_solvers::optimization::grey_wolf::Event;

/// An observer that forwards every event to [`tracing`].
///
/// Evaluations are logged at `TRACE`, completed iterations at `DEBUG` (or
/// `INFO` every `every` iterations), and objective failures at `WARN`.
/// Never returns an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceObserver {
    every: usize,
}

impl TraceObserver {
    /// Creates an observer that logs every iteration at `DEBUG` only.
    #[must_use]
    pub fn new() -> Self {
        Self { every: 0 }
    }

    /// Also logs every `every`-th iteration at `INFO`.
    ///
    /// An interval of zero disables the `INFO` summaries.
    #[must_use]
    pub fn summarize_every(mut self, every: usize) -> Self {
        self.every = every;
        self
    }

    fn summarizes(&self, iter: usize) -> bool {
        self.every != 0 && (iter + 1) % self.every == 0
    }
}

impl Default for TraceObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Objective, A> Observer<Event<'_, O>, A> for TraceObserver {
    fn observe(&mut self, event: &Event<'_, O>) -> Option<A> {
        match event {
            Event::Evaluated {
                iter,
                index,
                x,
                objective,
            } => trace!(iter, index, ?x, objective, "evaluated"),
            Event::ObjectiveFailed {
                iter,
                index,
                x,
                error,
            } => warn!(iter, index, ?x, %error, "objective failed"),
            Event::IterationCompleted {
                iter,
                coefficient,
                best_x,
                best_objective,
            } => {
                if self.summarizes(*iter) {
                    info!(iter, coefficient, best_objective, ?best_x, "progress");
                } else {
                    debug!(iter, coefficient, best_objective, "iteration completed");
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use wolfpack_solvers::optimization::grey_wolf::{Action, Config, Optimizer, Status};

    #[test]
    fn summarizes_on_interval() {
        let observer = TraceObserver::new().summarize_every(10);

        assert!(!observer.summarizes(0));
        assert!(observer.summarizes(9));
        assert!(!observer.summarizes(10));
        assert!(observer.summarizes(19));
    }

    #[test]
    fn zero_interval_never_summarizes() {
        let observer = TraceObserver::default();

        assert!((0..100).all(|iter| !observer.summarizes(iter)));
    }

    #[test]
    fn never_changes_the_search() {
        let config = Config::new(10, 15).unwrap().with_seed(5);
        let sphere = |x: &[f64]| x.iter().map(|xi| xi * xi).sum::<f64>();

        let plain = Optimizer::from_bounds(&[[-3.0, 3.0]; 2], &config)
            .unwrap()
            .minimize_unobserved(&sphere)
            .unwrap();
        let traced = Optimizer::from_bounds(&[[-3.0, 3.0]; 2], &config)
            .unwrap()
            .minimize(&sphere, TraceObserver::new().summarize_every(5))
            .unwrap();

        assert_eq!(traced.status, Status::MaxIters);
        assert_eq!(plain, traced);

        let mut observer = TraceObserver::new();
        let event: Event<'_, fn(&[f64]) -> f64> = Event::Evaluated {
            iter: 0,
            index: 0,
            x: &[0.0],
            objective: 0.0,
        };
        assert_eq!(Observer::<_, Action>::observe(&mut observer, &event), None);
    }
}
