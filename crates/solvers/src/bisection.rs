//! Bisection for single-variable root finding.
//!
//! # Algorithm
//!
//! Given an interval `[low, high]` where `f(low)` and `f(high)` have opposite
//! signs, the solver evaluates the midpoint `c`, then replaces whichever
//! endpoint shares the sign of `f(c)`. The width halves every step, so the
//! bracket always contains a sign change.
//!
//! Each step checks, in order:
//!
//! 1. `f(c) == 0` or `|f(c)| < function_tol` → [`Status::ResidualConverged`]
//! 2. `(high − low) / 2 < interval_tol`, or the bracket cannot be split at
//!    machine precision → [`Status::IntervalConverged`]
//! 3. `iter == max_iters` → [`Status::MaxIters`]
//!
//! Reaching `max_iters` is not an error. The returned [`Root`] carries the
//! best estimate and reports `is_converged() == false`.
//!
//! # Brackets
//!
//! [`bisect`] validates its endpoints with [`validate_bracket`] before the
//! loop starts. An exact zero at an endpoint returns immediately with
//! [`Status::ExactRoot`] and an empty log. Use [`bisect_bracket`] to skip
//! validation when a [`Bracket`] is already in hand.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, carrying that iteration's
//! [`IterationRecord`]. Observers can return [`Action::StopEarly`] to halt
//! with [`Status::StoppedByObserver`].

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod record;
mod root;


pub use action::Action;
pub use bracket::{Bracket, BracketError, BracketOutcome, Interval, Sign, validate_bracket};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use record::{IterationLog, IterationRecord};
pub use root::{Bisection, Root, Status};

pub(crate) use bracket::classify;

use log::{debug, trace, warn};

use rootscan_core::{Function, Observer};

use crate::evaluate::evaluate;

use record::Recorder;

/// Finds a root of `function` in `[a, b]` using bisection.
///
/// Observers see each iteration's record.
/// See the [module docs](self) for termination rules and observer actions.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if `[a, b]` does not bracket a sign
/// change, and [`Error::Evaluation`] if the function fails or returns a
/// non-finite value at any evaluated point.
pub fn bisect<F, Obs>(
    function: &F,
    a: f64,
    b: f64,
    config: &Config,
    observer: Obs,
) -> Result<Bisection, Error>
where
    F: Function + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let interval = Interval::new(a, b)?;

    match classify(function, interval)? {
        BracketOutcome::ImmediateRoot(x) => {
            debug!("bisection: exact root at endpoint x = {x}");
            Ok(Bisection {
                root: Root::exact(x, interval),
                log: IterationLog::default(),
            })
        }
        BracketOutcome::Valid(bracket) => bisect_bracket(function, &bracket, config, observer),
    }
}

/// Runs bisection without observation.
///
/// This is a convenience wrapper around [`bisect`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or evaluation fails.
pub fn bisect_unobserved<F>(function: &F, a: f64, b: f64, config: &Config) -> Result<Bisection, Error>
where
    F: Function + ?Sized,
{
    bisect(function, a, b, config, ())
}

/// Runs the bisection loop on an already-validated bracket.
///
/// # Errors
///
/// Returns [`Error::Evaluation`] if the function fails or returns a
/// non-finite value at a midpoint.
pub fn bisect_bracket<F, Obs>(
    function: &F,
    bracket: &Bracket,
    config: &Config,
    mut observer: Obs,
) -> Result<Bisection, Error>
where
    F: Function + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let origin = bracket.interval();
    let mut bracket = *bracket;
    let mut recorder = Recorder::new();
    let mut iter = 0;

    loop {
        iter += 1;

        let interval = bracket.interval();
        let midpoint = interval.midpoint();
        let value = evaluate(function, midpoint)?;

        let record = IterationRecord::new(iter, interval, midpoint, value);
        recorder.push(record);
        trace!(
            "bisection iter {iter}: [{}, {}] f({midpoint}) = {value}, half-width {}",
            interval.low(),
            interval.high(),
            record.half_width(),
        );

        let action = observer.observe(&Event { record: &record });

        #[allow(clippy::float_cmp)]
        let status = if value == 0.0 || value.abs() < config.function_tol() {
            Some(Status::ResidualConverged)
        } else if record.half_width() < config.interval_tol()
            || !interval.strictly_contains(midpoint)
        {
            Some(Status::IntervalConverged)
        } else if iter == config.max_iters() {
            Some(Status::MaxIters)
        } else if matches!(action, Some(Action::StopEarly)) {
            Some(Status::StoppedByObserver)
        } else {
            None
        };

        if let Some(status) = status {
            let root = Root {
                value: midpoint,
                residual: value,
                iters: iter,
                status,
                error: record.half_width(),
                interval: origin,
            };
            log_finish(&root);
            return Ok(Bisection {
                root,
                log: recorder.finish(),
            });
        }

        bracket.shrink(midpoint, Sign::of(value));
    }
}

fn log_finish(root: &Root) {
    match root.status {
        Status::MaxIters => warn!(
            "bisection on [{}, {}] hit max_iters = {} without converging; best estimate x = {} (f = {})",
            root.interval.low(),
            root.interval.high(),
            root.iters,
            root.value,
            root.residual,
        ),
        status => debug!(
            "bisection on [{}, {}] finished after {} iterations: {status:?}, x = {}",
            root.interval.low(),
            root.interval.high(),
            root.iters,
            root.value,
        ),
    }
}
