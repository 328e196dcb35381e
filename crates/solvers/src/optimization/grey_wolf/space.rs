use super::{BoundedDimension, Error};

/// Odd constant used to spread a single seed across dimensions.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// The axis-aligned box being searched: one [`BoundedDimension`] per axis.
///
/// The order of dimensions fixes the meaning of every coordinate vector:
/// `x[i]` always belongs to dimension `i`.
#[derive(Debug)]
pub struct SearchSpace {
    dimensions: Vec<BoundedDimension>,
}

impl SearchSpace {
    /// Creates a space from `[min, max]` pairs, each axis with its own
    /// entropy-seeded stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] for the first invalid pair.
    pub fn new(bounds: &[[f64; 2]]) -> Result<Self, Error> {
        bounds
            .iter()
            .map(|&[min, max]| BoundedDimension::new(min, max))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }

    /// Creates a reproducible space from `[min, max]` pairs.
    ///
    /// Each dimension receives a distinct seed derived from `seed` and its
    /// index, so no two axes replay the same stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] for the first invalid pair.
    pub fn seeded(bounds: &[[f64; 2]], seed: u64) -> Result<Self, Error> {
        bounds
            .iter()
            .zip(0_u64..)
            .map(|(&[min, max], index)| {
                BoundedDimension::seeded(min, max, dimension_seed(seed, index))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    /// Returns true if the space has no dimensions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Returns dimension `index`, if present.
    #[must_use]
    pub fn dimension(&self, index: usize) -> Option<&BoundedDimension> {
        self.dimensions.get(index)
    }

    /// Iterates over the dimensions in order.
    pub fn iter(&self) -> impl Iterator<Item = &BoundedDimension> {
        self.dimensions.iter()
    }

    /// Draws one point with every coordinate sampled from its own dimension.
    pub fn sample_point(&mut self) -> Vec<f64> {
        self.dimensions.iter_mut().map(BoundedDimension::sample).collect()
    }

    /// Returns true if `x` has one coordinate per dimension and each lies
    /// inside its dimension's interval.
    #[must_use]
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.len() && self.iter().zip(x).all(|(dim, &xi)| dim.contains(xi))
    }

    /// Checks that a coordinate vector of length `actual` fits this space.
    pub(super) fn check_len(&self, actual: usize) -> Result<(), Error> {
        if actual == self.len() {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.len(),
                actual,
            })
        }
    }

    /// Restarts every dimension's stream as [`SearchSpace::seeded`] would
    /// have started it.
    pub(super) fn reseed(&mut self, seed: u64) {
        for (dim, index) in self.dimensions.iter_mut().zip(0_u64..) {
            dim.reseed(dimension_seed(seed, index));
        }
    }

    pub(super) fn dimensions_mut(&mut self) -> &mut [BoundedDimension] {
        &mut self.dimensions
    }
}

fn dimension_seed(seed: u64, index: u64) -> u64 {
    seed.wrapping_add(index.wrapping_mul(SEED_STRIDE))
}

impl From<Vec<BoundedDimension>> for SearchSpace {
    fn from(dimensions: Vec<BoundedDimension>) -> Self {
        Self { dimensions }
    }
}
