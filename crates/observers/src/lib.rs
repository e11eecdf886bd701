//! Reusable observers and reports for rootscan solvers.
//!
//! This crate provides [`Observer`] implementations, capability traits that
//! let observers stay solver-agnostic, and plain-text renderings of solver
//! results.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`CanStopEarly`]) and the [`StopWhen`] observer
//! - [`table`] — Text tables for iteration logs, single roots, and root sets
//!
//! [`LogObserver`] writes each bisection step through the `log` facade.
//!
//! [`Observer`]: rootscan_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`StopWhen`]: traits::StopWhen

mod logging;

pub mod table;
pub mod traits;

pub use logging::LogObserver;
