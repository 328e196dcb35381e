/// Indicates why the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Ran the configured number of iterations.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a grey wolf search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Position of the alpha leader: the best candidate seen during the run.
    pub x: Vec<f64>,

    /// Objective value at `x`, in the caller's direction (not transformed).
    pub objective: f64,

    /// Number of completed iterations.
    pub iters: usize,
}
