use super::{bracket::Interval, record::IterationLog};

/// Why a bisection run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// An endpoint of the bracket was an exact zero; no iterations ran.
    ExactRoot,

    /// `|f(midpoint)|` fell below `function_tol` (or hit zero exactly).
    ResidualConverged,

    /// The half-width fell below `interval_tol`, or the bracket could no
    /// longer be split at machine precision.
    IntervalConverged,

    /// Reached `max_iters` without meeting either tolerance.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Returns true for the converged states.
    #[must_use]
    pub fn is_converged(self) -> bool {
        matches!(
            self,
            Self::ExactRoot | Self::ResidualConverged | Self::IntervalConverged
        )
    }
}

/// A root estimate produced when a bisection run terminates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Root {
    /// Best estimate of the root.
    pub value: f64,

    /// Function value at [`value`](Self::value).
    pub residual: f64,

    /// Iterations consumed.
    pub iters: usize,

    /// Final solver status.
    pub status: Status,

    /// Final half-width of the bracket; zero for exact roots.
    pub error: f64,

    /// The bracket the run started from.
    pub interval: Interval,
}

impl Root {
    /// A root found at an endpoint before any iteration.
    pub(crate) fn exact(value: f64, interval: Interval) -> Self {
        Self {
            value,
            residual: 0.0,
            iters: 0,
            status: Status::ExactRoot,
            error: 0.0,
            interval,
        }
    }

    /// Returns true if the run met a tolerance (or hit an exact zero).
    ///
    /// A `false` here is not an error: the value is still the best estimate
    /// available, and callers decide whether to warn or retry.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status.is_converged()
    }
}

/// The result of a single bisection call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Bisection {
    /// The root estimate.
    pub root: Root,

    /// One record per iteration, in order.
    pub log: IterationLog,
}

impl Bisection {
    /// Splits the result into the root and its log.
    #[must_use]
    pub fn into_parts(self) -> (Root, IterationLog) {
        (self.root, self.log)
    }
}
