//! Core traits and types for rootscan.
//!
//! This crate defines the shared abstractions that the solvers and observers
//! build on:
//!
//! - [`Function`] — a scalar function of one real variable that may fail
//! - [`FnFunction`], [`TryFnFunction`] — adapters that turn closures into
//!   [`Function`]s, with an optional label and default search domain
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`reference`] — the textbook cubic used throughout the course material

mod function;
mod observer;

pub mod reference;

pub use function::{FnFunction, Function, TryFnFunction, from_fn, try_from_fn};
pub use observer::Observer;
