use std::ops::ControlFlow;

use tracing::{debug, info, trace, warn};
use wolfpack_core::{Objective, Observer};

use crate::optimization::Goal;

use super::{
    Action, Candidate, Config, Error, Event, SearchSpace, Solution, leaders::Leaders,
    solution::Status,
};

/// Returns the convergence coefficient `a` for iteration `iter` of `iterations`.
///
/// `a` falls linearly from `2.0` at the first iteration toward `0.0`, which it
/// would reach at `iter == iterations`. Large values let candidates overshoot
/// the leaders and explore; small values pull them in.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn convergence_coefficient(iter: usize, iterations: usize) -> f64 {
    2.0 - iter as f64 * (2.0 / iterations as f64)
}

/// Core grey wolf search.
///
/// Leaders are ranked on `G::transform` of each objective value, so the same
/// loop minimizes (identity) and maximizes (negation) with "smaller is better"
/// comparisons only.
pub(super) fn search<G, O, Obs>(
    space: &mut SearchSpace,
    population: &mut [Candidate],
    config: &Config,
    objective: &O,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    G: Goal,
    O: Objective,
    Obs: for<'a> Observer<Event<'a, O>, Action>,
{
    let iterations = config.iterations();
    info!(
        goal = G::NAME,
        dimensions = space.len(),
        population = population.len(),
        iterations,
        "starting grey wolf search"
    );

    let mut leaders = Leaders::new();

    for iter in 0..iterations {
        let flow = scan::<G, O, Obs>(
            iter,
            space,
            population,
            objective,
            &mut observer,
            &mut leaders,
        )?;
        if flow.is_break() {
            return finish::<G>(&leaders, Status::StoppedByObserver, iter);
        }

        let coefficient = convergence_coefficient(iter, iterations);
        match leaders.guides() {
            Some(guides) => hunt(space, population, guides, coefficient),
            None => warn!(iter, "no comparable objective value yet, pack holds position"),
        }

        let Some((best, score)) = leaders.alpha() else {
            continue;
        };
        let best_objective = G::transform(score);
        debug!(iter, coefficient, best_objective, "iteration completed");

        let event = Event::IterationCompleted {
            iter,
            coefficient,
            best_x: best.coordinates(),
            best_objective,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish::<G>(&leaders, Status::StoppedByObserver, iter + 1);
        }
    }

    finish::<G>(&leaders, Status::MaxIters, iterations)
}

/// Evaluates every candidate in population order and offers it to the leaders.
///
/// Each candidate is first moved back into the space, so only in-range
/// positions are ever evaluated.
fn scan<G, O, Obs>(
    iter: usize,
    space: &mut SearchSpace,
    population: &mut [Candidate],
    objective: &O,
    observer: &mut Obs,
    leaders: &mut Leaders,
) -> Result<ControlFlow<()>, Error>
where
    G: Goal,
    O: Objective,
    Obs: for<'a> Observer<Event<'a, O>, Action>,
{
    for (index, candidate) in population.iter_mut().enumerate() {
        candidate.clamp_to_space(space)?;
        let x = candidate.coordinates();

        let value = match objective.evaluate(x) {
            Ok(value) => {
                let event = Event::Evaluated {
                    iter,
                    index,
                    x,
                    objective: value,
                };
                match observer.observe(&event) {
                    Some(Action::StopEarly) => {
                        leaders.consider(G::transform(value), candidate);
                        return Ok(ControlFlow::Break(()));
                    }
                    Some(Action::AssumeWorse) => continue,
                    None => value,
                }
            }
            Err(error) => {
                let event = Event::ObjectiveFailed {
                    iter,
                    index,
                    x,
                    error: &error,
                };
                match observer.observe(&event) {
                    Some(Action::StopEarly) => return Ok(ControlFlow::Break(())),
                    Some(Action::AssumeWorse) => continue,
                    None => return Err(Error::Objective(Box::new(error))),
                }
            }
        };

        let score = G::transform(value);
        if let Some(rank) = leaders.consider(score, candidate) {
            trace!(iter, index, ?rank, objective = value, "new leader");
        }
    }

    Ok(ControlFlow::Continue(()))
}

/// Moves every candidate toward a blend of the alpha, beta, and delta guides.
///
/// For each coordinate, each guide contributes `guide - A * |C * guide - x|`
/// with fresh draws `A = 2a·r1 - 1` and `C = 2·r2` from that dimension's
/// stream; the new coordinate is the mean of the three contributions.
fn hunt(
    space: &mut SearchSpace,
    population: &mut [Candidate],
    guides: [&[f64]; 3],
    coefficient: f64,
) {
    for candidate in population.iter_mut() {
        let axes = candidate
            .coordinates_mut()
            .iter_mut()
            .zip(space.dimensions_mut());

        for (j, (x, dim)) in axes.enumerate() {
            let current = *x;
            let sum: f64 = guides
                .iter()
                .map(|guide| {
                    let a = 2.0 * coefficient * dim.uniform() - 1.0;
                    let c = 2.0 * dim.uniform();
                    let distance = (c * guide[j] - current).abs();
                    guide[j] - a * distance
                })
                .sum();
            *x = sum / 3.0;
        }
    }
}

fn finish<G: Goal>(leaders: &Leaders, status: Status, iters: usize) -> Result<Solution, Error> {
    let (best, score) = leaders.alpha().ok_or(Error::NoLeader)?;
    let objective = G::transform(score);

    info!(?status, objective, iters, "grey wolf search finished");

    Ok(Solution {
        status,
        x: best.coordinates().to_vec(),
        objective,
        iters,
    })
}
