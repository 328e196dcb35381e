//! Early stopping once a target objective is reached.

use wolfpack_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Which side of the target counts as reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    AtOrBelow,
    AtOrAbove,
}

/// Stops the solver as soon as an event reports an objective at the target.
///
/// Works with any solver whose events implement [`HasObjective`] and whose
/// actions implement [`CanStopEarly`]. Events without an objective (reported
/// as NaN) never trigger a stop.
///
/// ```rust
/// use wolfpack_observers::StopAtTarget;
/// use wolfpack_solvers::optimization::grey_wolf::{Config, Optimizer, Status};
///
/// let config = Config::new(30, 500)?.with_seed(3);
/// let mut optimizer = Optimizer::from_bounds(&[[-5.0, 5.0]; 2], &config)?;
///
/// let solution = optimizer.minimize(
///     &|x: &[f64]| x[0] * x[0] + x[1] * x[1],
///     StopAtTarget::at_or_below(1e-4),
/// )?;
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert!(solution.iters < 500);
/// # Ok::<(), wolfpack_solvers::optimization::grey_wolf::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAtTarget {
    target: f64,
    side: Side,
}

impl StopAtTarget {
    /// Stops once an objective is less than or equal to `target`.
    ///
    /// Use when minimizing.
    #[must_use]
    pub fn at_or_below(target: f64) -> Self {
        Self {
            target,
            side: Side::AtOrBelow,
        }
    }

    /// Stops once an objective is greater than or equal to `target`.
    ///
    /// Use when maximizing.
    #[must_use]
    pub fn at_or_above(target: f64) -> Self {
        Self {
            target,
            side: Side::AtOrAbove,
        }
    }

    /// Returns the target objective.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    fn reached(&self, objective: f64) -> bool {
        match self.side {
            Side::AtOrBelow => objective <= self.target,
            Side::AtOrAbove => objective >= self.target,
        }
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for StopAtTarget {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.reached(event.objective()).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use wolfpack_solvers::optimization::grey_wolf::{Config, Optimizer, Status};

    struct Reading(f64);

    impl HasObjective for Reading {
        fn objective(&self) -> f64 {
            self.0
        }
    }

    #[derive(Debug, PartialEq)]
    struct Stop;

    impl CanStopEarly for Stop {
        fn stop_early() -> Self {
            Stop
        }
    }

    #[test]
    fn below_stops_at_or_under_target() {
        let mut observer = StopAtTarget::at_or_below(1.0);

        assert_eq!(observer.observe(&Reading(1.5)), None::<Stop>);
        assert_eq!(observer.observe(&Reading(1.0)), Some(Stop));
        assert_eq!(observer.observe(&Reading(-3.0)), Some(Stop));
    }

    #[test]
    fn above_stops_at_or_over_target() {
        let mut observer = StopAtTarget::at_or_above(1.0);

        assert_eq!(observer.observe(&Reading(0.5)), None::<Stop>);
        assert_eq!(observer.observe(&Reading(1.0)), Some(Stop));
    }

    #[test]
    fn nan_never_reaches_target() {
        let mut below = StopAtTarget::at_or_below(f64::INFINITY);
        let mut above = StopAtTarget::at_or_above(f64::NEG_INFINITY);

        assert_eq!(below.observe(&Reading(f64::NAN)), None::<Stop>);
        assert_eq!(above.observe(&Reading(f64::NAN)), None::<Stop>);
    }

    #[test]
    fn stops_a_maximization_once_target_is_met() {
        let config = Config::new(20, 200).unwrap().with_seed(8);
        let mut optimizer = Optimizer::from_bounds(&[[0.0, 10.0]], &config).unwrap();

        let solution = optimizer
            .maximize(&|x: &[f64]| x[0], StopAtTarget::at_or_above(9.0))
            .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.objective >= 9.0);
        assert!(solution.iters < 200);
    }

    #[test]
    fn unreachable_target_runs_to_completion() {
        let config = Config::new(10, 20).unwrap().with_seed(9);
        let mut optimizer = Optimizer::from_bounds(&[[1.0, 2.0]], &config).unwrap();

        let solution = optimizer
            .minimize(&|x: &[f64]| x[0], StopAtTarget::at_or_below(0.0))
            .unwrap();

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 20);
    }
}
