//! Bracketing root finders for scalar functions.
//!
//! A [`Function`] maps a real `x` to a real value. Solvers in this crate find
//! the `x` where that value crosses zero:
//!
//! - [`evaluate`] — evaluates a function, rejecting errors and non-finite values
//! - [`bisection`] — validates a bracket and halves it until a tolerance is met,
//!   recording every step in an [`IterationLog`]
//! - [`scan`] — sweeps a domain for sign changes and bisects each one, returning
//!   a deduplicated, sorted [`RootSet`]
//! - [`reference`] — the textbook brackets for the reference cubic
//!
//! Every call is self-contained: no state survives between calls, so identical
//! inputs always produce identical results.
//!
//! [`Function`]: rootscan_core::Function
//! [`IterationLog`]: bisection::IterationLog
//! [`RootSet`]: scan::RootSet

mod evaluate;

pub mod bisection;
pub mod reference;
pub mod scan;

pub use evaluate::{EvaluationError, evaluate};
