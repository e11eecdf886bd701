//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written against them works with any solver that implements them.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootscan_core::Observer;
//! use rootscan_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use rootscan_core::Observer;
use rootscan_solvers::bisection;

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for bisection::Event<'_> {
    fn residual(&self) -> f64 {
        self.value()
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

/// Stops a solver the first time a residual satisfies a predicate.
///
/// Useful for looser, caller-side stopping rules layered on top of the
/// solver's own tolerances.
///
/// ```rust
/// use rootscan_core::reference::Cubic;
/// use rootscan_observers::traits::StopWhen;
/// use rootscan_solvers::bisection::{self, Config, Status};
///
/// let observer = StopWhen::new(|residual: f64| residual.abs() < 1e-3);
/// let result = bisection::bisect(&Cubic, 2.0, 3.0, &Config::default(), observer).unwrap();
///
/// assert_eq!(result.root.status, Status::StoppedByObserver);
/// assert!(result.root.residual.abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StopWhen<P> {
    predicate: P,
}

impl<P> StopWhen<P>
where
    P: FnMut(f64) -> bool,
{
    /// Creates an observer that stops once `predicate(residual)` is true.
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<E, A, P> Observer<E, A> for StopWhen<P>
where
    E: HasResidual,
    A: CanStopEarly,
    P: FnMut(f64) -> bool,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (self.predicate)(event.residual()).then(A::stop_early)
    }
}
