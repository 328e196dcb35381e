//! Regression suite: the optimizer must reach known optima of standard
//! benchmark functions.

use integration_tests::benchmarks::{
    ACKLEY, BOOTH, Benchmark, EASOM, MATYAS, MATYAS_OFFSET, sphere,
};
use integration_tests::init_tracing;
use wolfpack_observers::{History, TraceObserver};
use wolfpack_solvers::optimization::grey_wolf::{Config, Optimizer, Solution, Status};

const TOLERANCE: f64 = 1e-3;

fn run(benchmark: &Benchmark, seed: u64) -> Solution {
    init_tracing();
    let config = Config::default().with_seed(seed);
    let mut optimizer = Optimizer::from_bounds(benchmark.bounds, &config).unwrap();
    optimizer
        .minimize(&benchmark.function, TraceObserver::new().summarize_every(50))
        .unwrap()
}

fn assert_reaches_optimum(benchmark: &Benchmark) {
    for seed in [1, 2, 3] {
        let solution = run(benchmark, seed);

        assert_eq!(solution.status, Status::MaxIters);
        assert!(
            (solution.objective - benchmark.optimum).abs() <= TOLERANCE,
            "{} (seed {seed}): expected {}, got {} at {:?}",
            benchmark.name,
            benchmark.optimum,
            solution.objective,
            solution.x,
        );
    }
}

#[test]
fn easom() {
    assert_reaches_optimum(&EASOM);
}

#[test]
fn ackley() {
    assert_reaches_optimum(&ACKLEY);
}

#[test]
fn booth() {
    assert_reaches_optimum(&BOOTH);
}

#[test]
fn matyas() {
    assert_reaches_optimum(&MATYAS);
}

#[test]
fn matyas_offset_box_finds_the_corner() {
    for seed in [1, 2, 3] {
        let solution = run(&MATYAS_OFFSET, seed);

        // No point in the box beats the corner.
        assert!(solution.objective >= MATYAS_OFFSET.optimum - 1e-9);
        assert!(
            (solution.objective - MATYAS_OFFSET.optimum).abs() <= 0.1,
            "seed {seed}: got {} at {:?}",
            solution.objective,
            solution.x,
        );
    }
}

#[test]
fn easom_converges_across_many_seeds() {
    for seed in 100..130 {
        let solution = run(&EASOM, seed);

        assert!(
            (solution.objective - EASOM.optimum).abs() <= TOLERANCE,
            "seed {seed}: got {} at {:?}",
            solution.objective,
            solution.x,
        );
    }
}

#[test]
fn maximizes_negated_benchmark() {
    init_tracing();
    let config = Config::default().with_seed(4);
    let mut optimizer = Optimizer::from_bounds(BOOTH.bounds, &config).unwrap();

    let solution = optimizer
        .maximize_unobserved(&|x: &[f64]| -(BOOTH.function)(x))
        .unwrap();

    assert!(solution.objective.abs() <= TOLERANCE, "got {}", solution.objective);
    assert!((solution.x[0] - 1.0).abs() <= 0.1);
    assert!((solution.x[1] - 3.0).abs() <= 0.1);
}

#[test]
fn convergence_curve_is_monotone() {
    init_tracing();
    let config = Config::new(30, 80).unwrap().with_seed(5);
    let mut optimizer = Optimizer::from_bounds(&[[-100.0, 100.0]; 5], &config).unwrap();
    let mut history = History::new();

    let solution = optimizer.minimize(&sphere, &mut history).unwrap();

    let curve = history.best_objectives();
    assert_eq!(curve.len(), 80);
    assert!(curve.windows(2).all(|w| w[1] <= w[0]));
    assert!(curve[79] < curve[0]);
    assert_eq!(history.last(), Some(solution.objective));
}
