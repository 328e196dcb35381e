use std::convert::Infallible;

/// A scalar objective evaluated at a point of the search space.
///
/// Objectives must be deterministic and free of side effects: evaluating the
/// same `x` twice must produce the same value. They may be discontinuous,
/// non-differentiable, or multimodal, since solvers only ever sample them.
///
/// Any `Fn(&[f64]) -> f64` is an objective that cannot fail, so plain
/// functions and closures work directly:
///
/// ```
/// use wolfpack_core::Objective;
///
/// let sphere = |x: &[f64]| x.iter().map(|xi| xi * xi).sum::<f64>();
///
/// assert_eq!(sphere.evaluate(&[3.0, 4.0]), Ok(25.0));
/// ```
///
/// Objectives that can fail implement the trait on their own type and pick
/// a domain-specific `Error`.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// The length of `x` always equals the dimensionality of the search space
    /// the solver was built with.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed at `x`.
    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use thiserror::Error;

    fn booth(x: &[f64]) -> f64 {
        (x[0] + 2.0 * x[1] - 7.0).powi(2) + (2.0 * x[0] + x[1] - 5.0).powi(2)
    }

    #[derive(Debug, Error, PartialEq)]
    #[error("log is undefined at {0}")]
    struct Undefined(f64);

    struct LogSum;

    impl Objective for LogSum {
        type Error = Undefined;

        fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
            x.iter().try_fold(0.0, |acc, &xi| {
                if xi > 0.0 {
                    Ok(acc + xi.ln())
                } else {
                    Err(Undefined(xi))
                }
            })
        }
    }

    #[test]
    fn fn_items_are_objectives() {
        assert_eq!(booth.evaluate(&[1.0, 3.0]), Ok(0.0));
    }

    #[test]
    fn closures_are_objectives() {
        let offset = 2.0;
        let shifted = |x: &[f64]| x[0] - offset;

        assert_eq!(shifted.evaluate(&[5.0]), Ok(3.0));
    }

    #[test]
    fn custom_objectives_report_errors() {
        assert!(LogSum.evaluate(&[1.0, 1.0]).is_ok());
        assert_eq!(LogSum.evaluate(&[1.0, -2.0]), Err(Undefined(-2.0)));
    }
}
