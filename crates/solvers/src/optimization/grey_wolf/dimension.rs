use rand::{Rng, SeedableRng, rngs::StdRng};

use super::Error;

/// One axis of the search space: the closed interval `[min, max]` together
/// with a random stream owned by this axis alone.
///
/// The stream advances on every draw, so a dimension is not
/// `Clone`: two copies would replay the same sequence.
#[derive(Debug)]
pub struct BoundedDimension {
    min: f64,
    max: f64,
    rng: StdRng,
}

impl BoundedDimension {
    /// Creates a dimension with an independent, entropy-seeded stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `min > max` or either bound is not finite.
    pub fn new(min: f64, max: f64) -> Result<Self, Error> {
        Self::with_rng(min, max, StdRng::from_os_rng())
    }

    /// Creates a dimension whose stream is reproducible from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `min > max` or either bound is not finite.
    pub fn seeded(min: f64, max: f64, seed: u64) -> Result<Self, Error> {
        Self::with_rng(min, max, StdRng::seed_from_u64(seed))
    }

    fn with_rng(min: f64, max: f64, rng: StdRng) -> Result<Self, Error> {
        if min > max || !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidBounds { min, max });
        }
        Ok(Self { min, max, rng })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `max - min`.
    ///
    /// Infinite when the bounds are finite but further apart than `f64::MAX`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Draws a value uniformly distributed over `[min, max]`.
    ///
    /// A degenerate dimension (`min == max`) always returns `min`.
    pub fn sample(&mut self) -> f64 {
        let u = self.uniform();
        // Interpolating between the bounds stays finite even when the width
        // overflows. Rounding can land just outside the interval.
        (self.min * (1.0 - u) + self.max * u).clamp(self.min, self.max)
    }

    /// Returns true if `x` lies in the closed interval `[min, max]`.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Restarts the stream from `seed`.
    pub(super) fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Draws from the standard uniform distribution on `[0, 1)`.
    pub(super) fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_bounds() {
        let mut dim = BoundedDimension::new(1.0, 3.0).unwrap();

        for _ in 0..=1000 {
            let value = dim.sample();
            assert!(dim.contains(value), "{value} escaped [1, 3]");
        }
    }

    #[test]
    fn samples_spread_across_interval() {
        let mut dim = BoundedDimension::seeded(-100.0, 100.0, 7).unwrap();

        let samples: Vec<f64> = (0..2000).map(|_| dim.sample()).collect();
        let below = samples.iter().filter(|&&v| v < 0.0).count();

        // Uniform draws land on either side of the midpoint about equally.
        assert!((800..1200).contains(&below), "{below} of 2000 below zero");
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = BoundedDimension::new(3.0, 1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidBounds { min, max } if min == 3.0 && max == 1.0));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(BoundedDimension::new(f64::NAN, 1.0).is_err());
        assert!(BoundedDimension::new(0.0, f64::NAN).is_err());
        assert!(BoundedDimension::new(0.0, f64::INFINITY).is_err());
        assert!(BoundedDimension::new(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn accepts_bounds_wider_than_f64_max() {
        let mut dim = BoundedDimension::seeded(-f64::MAX, f64::MAX, 3).unwrap();

        assert!(dim.width().is_infinite());
        for _ in 0..1000 {
            let value = dim.sample();
            assert!(value.is_finite() && dim.contains(value), "{value} escaped");
        }
    }

    #[test]
    fn narrow_offset_interval_samples_stay_inside() {
        let mut dim = BoundedDimension::seeded(1e6, 1e6 + 1e-9, 4).unwrap();

        for _ in 0..1000 {
            let value = dim.sample();
            assert!(dim.contains(value), "{value} escaped");
        }
    }

    #[test]
    fn degenerate_interval_always_samples_min() {
        let mut dim = BoundedDimension::new(2.5, 2.5).unwrap();

        for _ in 0..100 {
            assert_eq!(dim.sample(), 2.5);
        }
    }

    #[test]
    fn contains_is_closed_at_both_ends() {
        let dim = BoundedDimension::new(-1.0, 1.0).unwrap();

        assert!(dim.contains(-1.0));
        assert!(dim.contains(1.0));
        assert!(dim.contains(0.0));
        assert!(!dim.contains(-1.000_001));
        assert!(!dim.contains(1.000_001));
        assert!(!dim.contains(f64::NAN));
    }

    #[test]
    fn same_seed_replays_stream() {
        let mut a = BoundedDimension::seeded(0.0, 1.0, 42).unwrap();
        let mut b = BoundedDimension::seeded(0.0, 1.0, 42).unwrap();

        for _ in 0..10 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn unseeded_dimensions_have_independent_streams() {
        let mut a = BoundedDimension::new(0.0, 1.0).unwrap();
        let mut b = BoundedDimension::new(0.0, 1.0).unwrap();

        let a_draws: Vec<f64> = (0..8).map(|_| a.sample()).collect();
        let b_draws: Vec<f64> = (0..8).map(|_| b.sample()).collect();
        assert_ne!(a_draws, b_draws);
    }
}
