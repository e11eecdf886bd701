use thiserror::Error;

use crate::bisection::BracketError;

/// Errors that abort a multi-root scan.
///
/// Per-sub-interval problems never surface here: brackets without a sign
/// change are skipped, and evaluation failures are listed in
/// [`RootSet::skipped`](super::RootSet::skipped).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ScanError {
    #[error("invalid domain: {0}")]
    InvalidDomain(#[from] BracketError),

    #[error("function has no default search domain")]
    NoDomain,

    #[error("step {step} is too small for a domain of width {width}")]
    TooManySteps { step: f64, width: f64 },
}
