//! Multi-root discovery by sweeping a domain for sign changes.
//!
//! # Algorithm
//!
//! The domain is split into consecutive sub-intervals of width `step` (the
//! last one clipped to the domain's upper bound). Each sub-interval is
//! classified with the same bracket check [`bisect`](crate::bisection::bisect)
//! uses:
//!
//! - an exact zero at an endpoint is accepted as a root directly (both
//!   endpoints, if both are zeros)
//! - a sign change is bisected with the scan's bisection [`Config`]
//! - no sign change means the sub-interval is skipped
//!
//! Candidates are then sorted and merged: two roots closer than
//! `dedup_epsilon` are one root, and the one with the smaller error estimate
//! is kept.
//!
//! # Limitations
//!
//! A coarse scan is inherently incomplete. It misses:
//!
//! - pairs of roots closer together than `step`, since the two sign changes
//!   cancel within one sub-interval
//! - roots of even multiplicity (tangent roots such as `x²` at zero), which
//!   never produce a sign change
//! - sign changes inside a sub-interval whose endpoint is an exact zero,
//!   since the endpoint root is accepted without bisecting (`x (x − 0.05)`
//!   with `step = 0.1` from zero reports only `0`)
//!
//! A sign change across a pole looks like a root to the bracket check. The
//! bisection run that follows fails to evaluate at the pole or converges next
//! to it, so inspect residuals when the function has singularities.
//!
//! [`Config`]: crate::bisection::Config

mod config;
mod error;
mod root_set;

#[cfg(test)]
mod tests;

pub use config::{ScanConfig, ScanConfigError};
pub use error::ScanError;
pub use root_set::{RootSet, Skipped};

use log::{debug, info, warn};

use rootscan_core::Function;

use crate::{
    bisection::{BracketOutcome, Error, Interval, Root, bisect_bracket, classify},
    evaluate::evaluate,
};

/// Finds every root of `function` in `domain` that a sweep of width
/// `config.step()` can bracket.
///
/// Reversed domain bounds are reordered. See the [module docs](self) for
/// what a sweep can miss.
///
/// # Errors
///
/// Returns [`ScanError::InvalidDomain`] if the bounds are non-finite or
/// equal, and [`ScanError::TooManySteps`] if `step` is too small to count
/// the sub-intervals. Failures inside a sub-interval are not errors.
pub fn find_all_roots<F>(
    function: &F,
    domain: [f64; 2],
    config: &ScanConfig,
) -> Result<RootSet, ScanError>
where
    F: Function + ?Sized,
{
    let domain = Interval::new(domain[0], domain[1])?;
    let (low, high) = (domain.low(), domain.high());
    let step = config.step();

    let count = (domain.width() / step).ceil();
    if !count.is_finite() || count > f64::from(u32::MAX) {
        return Err(ScanError::TooManySteps {
            step,
            width: domain.width(),
        });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = count as usize;

    let mut candidates = Vec::new();
    let mut skipped = Vec::new();

    for i in 0..count {
        #[allow(clippy::cast_precision_loss)]
        let left = low + i as f64 * step;
        #[allow(clippy::cast_precision_loss)]
        let right = if i + 1 == count {
            high
        } else {
            (low + (i + 1) as f64 * step).min(high)
        };

        if right <= left {
            continue;
        }
        let interval = Interval::new(left, right)?;

        match search(function, interval, config, &mut candidates) {
            Ok(()) => {}
            Err(error) => {
                warn!("scan: skipping [{left}, {right}]: {error}");
                skipped.push(Skipped {
                    interval,
                    reason: error.to_string(),
                });
            }
        }
    }

    let roots = RootSet::from_candidates(candidates, config.dedup_epsilon(), skipped);
    info!(
        "scan of [{low}, {high}] with step {step} found {} root(s), skipped {} sub-interval(s)",
        roots.len(),
        roots.skipped().len(),
    );

    Ok(roots)
}

/// Scans the function's own default domain.
///
/// # Errors
///
/// Returns [`ScanError::NoDomain`] if [`Function::domain`] is `None`, or any
/// error [`find_all_roots`] returns.
pub fn find_all_roots_in_domain<F>(function: &F, config: &ScanConfig) -> Result<RootSet, ScanError>
where
    F: Function + ?Sized,
{
    let domain = function.domain().ok_or(ScanError::NoDomain)?;
    find_all_roots(function, domain, config)
}

/// Looks for roots in one sub-interval and appends them to `candidates`.
///
/// Nothing is appended when there is no sign change. When both endpoints
/// are exact zeros, both are appended.
fn search<F>(
    function: &F,
    interval: Interval,
    config: &ScanConfig,
    candidates: &mut Vec<Root>,
) -> Result<(), Error>
where
    F: Function + ?Sized,
{
    match classify(function, interval) {
        Ok(BracketOutcome::ImmediateRoot(x)) => {
            debug!("scan: exact root at x = {x}");
            candidates.push(Root::exact(x, interval));

            // Zero at `low` hides a zero at `high`.
            #[allow(clippy::float_cmp)]
            if x == interval.low() && evaluate(function, interval.high())? == 0.0 {
                debug!("scan: exact root at x = {}", interval.high());
                candidates.push(Root::exact(interval.high(), interval));
            }
            Ok(())
        }
        Ok(BracketOutcome::Valid(bracket)) => {
            debug!(
                "scan: sign change in [{}, {}]",
                interval.low(),
                interval.high()
            );
            let result = bisect_bracket(function, &bracket, config.bisection(), ())?;
            candidates.push(result.root);
            Ok(())
        }
        Err(Error::InvalidBracket(_)) => Ok(()),
        Err(error) => Err(error),
    }
}
