/// Defines the optimization direction.
///
/// Solvers rank transformed values with "smaller is better" comparisons only,
/// so [`Goal::transform`] is the single place where the direction enters.
/// The transform is its own inverse, which lets solvers map a ranked score
/// back to the objective the caller sees.
pub trait Goal {
    /// Short name used in logs.
    const NAME: &'static str;

    /// Transforms an objective value for internal minimization.
    ///
    /// - [`Minimize`]: returns the value unchanged
    /// - [`Maximize`]: negates the value
    fn transform(value: f64) -> f64;
}

/// Minimize the objective function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimize;

impl Goal for Minimize {
    const NAME: &'static str = "minimize";

    #[inline]
    fn transform(value: f64) -> f64 {
        value
    }
}

/// Maximize the objective function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Maximize;

impl Goal for Maximize {
    const NAME: &'static str = "maximize";

    #[inline]
    fn transform(value: f64) -> f64 {
        -value
    }
}
