use wolfpack_core::Objective;

/// Events emitted by the grey wolf solver.
///
/// Within an iteration the solver emits one `Evaluated` or `ObjectiveFailed`
/// event per candidate, in population order, then a single
/// `IterationCompleted` once the pack has moved. All objective values are in
/// the caller's direction, whether the run minimizes or maximizes.
pub enum Event<'a, O: Objective> {
    /// A candidate was evaluated, before it is offered to the leaders.
    Evaluated {
        /// Zero-based iteration.
        iter: usize,

        /// Index of the candidate in the population.
        index: usize,

        /// The evaluated position.
        x: &'a [f64],

        /// The objective value at `x`.
        objective: f64,
    },

    /// The objective returned an error.
    ObjectiveFailed {
        /// Zero-based iteration.
        iter: usize,

        /// Index of the candidate in the population.
        index: usize,

        /// The position that failed to evaluate.
        x: &'a [f64],

        /// The objective error.
        error: &'a O::Error,
    },

    /// Every candidate has been moved toward the leaders.
    ///
    /// Not emitted for an iteration that ends without any leader.
    IterationCompleted {
        /// Zero-based iteration.
        iter: usize,

        /// Convergence coefficient `a` used for this iteration's moves.
        coefficient: f64,

        /// Position of the alpha leader.
        best_x: &'a [f64],

        /// Objective value of the alpha leader.
        best_objective: f64,
    },
}

impl<'a, O: Objective> Event<'a, O> {
    /// Returns the zero-based iteration the event belongs to.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Evaluated { iter, .. }
            | Self::ObjectiveFailed { iter, .. }
            | Self::IterationCompleted { iter, .. } => *iter,
        }
    }

    /// Returns the position the event describes.
    ///
    /// For [`Event::IterationCompleted`] this is the alpha leader's position.
    #[must_use]
    pub fn x(&self) -> &'a [f64] {
        match self {
            Self::Evaluated { x, .. } | Self::ObjectiveFailed { x, .. } => *x,
            Self::IterationCompleted { best_x, .. } => *best_x,
        }
    }
}
