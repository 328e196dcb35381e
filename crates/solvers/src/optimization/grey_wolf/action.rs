/// Actions an observer can take during a grey wolf search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver immediately and return the best candidate found so far.
    ///
    /// Returned for an [`Event::Evaluated`], the evaluated candidate still
    /// competes for alpha before the search stops.
    ///
    /// [`Event::Evaluated`]: super::Event::Evaluated
    StopEarly,

    /// Treat this candidate as worse than every leader.
    ///
    /// The candidate is left out of leader selection for this evaluation but
    /// keeps moving with the rest of the pack. Returned for an
    /// [`Event::ObjectiveFailed`], it lets the search continue past the failure.
    ///
    /// Has no effect on [`Event::IterationCompleted`].
    ///
    /// [`Event::ObjectiveFailed`]: super::Event::ObjectiveFailed
    /// [`Event::IterationCompleted`]: super::Event::IterationCompleted
    AssumeWorse,
}
