/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the current midpoint as the estimate.
    ///
    /// Ignored on the step where a tolerance or `max_iters` is reached, since
    /// the run ends there anyway.
    StopEarly,
}
