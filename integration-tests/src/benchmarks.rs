//! Standard benchmark functions with known global optima.

use std::f64::consts::{E, PI};

/// A benchmark function together with its reference domain and optimum.
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    pub name: &'static str,
    pub function: fn(&[f64]) -> f64,
    pub bounds: &'static [[f64; 2]],
    pub optimum: f64,
}

/// Easom: `-cos(x)·cos(y)·exp(-((x-π)² + (y-π)²))`, minimum `-1` at `(π, π)`.
#[must_use]
pub fn easom(x: &[f64]) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    -x1.cos() * x2.cos() * (-((x1 - PI).powi(2) + (x2 - PI).powi(2))).exp()
}

/// Ackley in two dimensions, minimum `0` at the origin.
#[must_use]
pub fn ackley(x: &[f64]) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let radial = (0.5 * (x1 * x1 + x2 * x2)).sqrt();
    let wave = 0.5 * ((2.0 * PI * x1).cos() + (2.0 * PI * x2).cos());
    -20.0 * (-0.2 * radial).exp() - wave.exp() + E + 20.0
}

/// Booth: `(x + 2y - 7)² + (2x + y - 5)²`, minimum `0` at `(1, 3)`.
#[must_use]
pub fn booth(x: &[f64]) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (x1 + 2.0 * x2 - 7.0).powi(2) + (2.0 * x1 + x2 - 5.0).powi(2)
}

/// Matyas: `0.26·(x² + y²) - 0.48·x·y`, minimum `0` at the origin.
#[must_use]
pub fn matyas(x: &[f64]) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    0.26 * (x1 * x1 + x2 * x2) - 0.48 * x1 * x2
}

/// Sphere in any dimension, minimum `0` at the origin.
#[must_use]
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

pub const EASOM: Benchmark = Benchmark {
    name: "easom",
    function: easom,
    bounds: &[[-100.0, 100.0], [-100.0, 100.0]],
    optimum: -1.0,
};

pub const ACKLEY: Benchmark = Benchmark {
    name: "ackley",
    function: ackley,
    bounds: &[[-5.0, 5.0], [-5.0, 5.0]],
    optimum: 0.0,
};

pub const BOOTH: Benchmark = Benchmark {
    name: "booth",
    function: booth,
    bounds: &[[-10.0, 10.0], [-10.0, 10.0]],
    optimum: 0.0,
};

/// Matyas over its usual square domain, which contains the origin.
pub const MATYAS: Benchmark = Benchmark {
    name: "matyas",
    function: matyas,
    bounds: &[[-10.0, 10.0], [-10.0, 10.0]],
    optimum: 0.0,
};

/// Matyas over `[-15, -5] × [-3, 3]`.
///
/// The origin lies outside this box. The best value inside it is at the
/// corner `(-5, -3)`, where `f = 1.64`.
pub const MATYAS_OFFSET: Benchmark = Benchmark {
    name: "matyas (offset box)",
    function: matyas,
    bounds: &[[-15.0, -5.0], [-3.0, 3.0]],
    optimum: 1.64,
};
