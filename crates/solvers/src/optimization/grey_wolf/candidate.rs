use super::{Error, SearchSpace};

/// One point of the population: a coordinate per dimension of the space.
///
/// The coordinate count is fixed when the candidate is created and checked
/// against the space whenever the two meet.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    coordinates: Vec<f64>,
}

impl Candidate {
    /// Creates a candidate from explicit coordinates.
    ///
    /// Coordinates outside the space are accepted here; they are resampled the
    /// next time the candidate is moved back into the space.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `coordinates` does not have one
    /// entry per dimension of `space`.
    pub fn new(coordinates: Vec<f64>, space: &SearchSpace) -> Result<Self, Error> {
        space.check_len(coordinates.len())?;
        Ok(Self { coordinates })
    }

    /// Draws a candidate uniformly from the space.
    pub fn sample(space: &mut SearchSpace) -> Self {
        Self {
            coordinates: space.sample_point(),
        }
    }

    /// Returns the coordinates.
    #[must_use]
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns true if the candidate has no coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Consumes the candidate and returns its coordinates.
    #[must_use]
    pub fn into_coordinates(self) -> Vec<f64> {
        self.coordinates
    }

    /// Moves every out-of-range coordinate back into the space.
    ///
    /// An out-of-range coordinate is replaced by a fresh sample of its
    /// dimension, not projected onto the nearest bound. In-range coordinates
    /// are left untouched, so calling this on a contained candidate is a no-op
    /// that consumes no random draws.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the candidate and space disagree
    /// on dimensionality.
    pub fn clamp_to_space(&mut self, space: &mut SearchSpace) -> Result<(), Error> {
        space.check_len(self.coordinates.len())?;

        for (x, dim) in self.coordinates.iter_mut().zip(space.dimensions_mut()) {
            if !dim.contains(*x) {
                *x = dim.sample();
            }
        }
        Ok(())
    }

    pub(super) fn coordinates_mut(&mut self) -> &mut [f64] {
        &mut self.coordinates
    }
}
