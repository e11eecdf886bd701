use std::error::Error as StdError;

use thiserror::Error;

use rootscan_core::Function;

/// Errors that can occur when evaluating a function at a point.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// The function reported that it is undefined at `x`.
    #[error("function undefined at x = {x}: {source}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The function returned NaN or an infinity.
    #[error("non-finite value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },
}

impl EvaluationError {
    /// Returns the point at which evaluation failed.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Function { x, .. } | Self::NonFinite { x, .. } => *x,
        }
    }
}

/// Evaluates `function` at `x`.
///
/// A non-finite result is reported as an error rather than passed through,
/// so callers never mistake a NaN for a sign.
///
/// # Errors
///
/// Returns [`EvaluationError::Function`] if the function fails at `x`, or
/// [`EvaluationError::NonFinite`] if it returns NaN or an infinity.
pub fn evaluate<F>(function: &F, x: f64) -> Result<f64, EvaluationError>
where
    F: Function + ?Sized,
{
    let value = function
        .call(x)
        .map_err(|error| EvaluationError::Function {
            x,
            source: Box::new(error),
        })?;

    if !value.is_finite() {
        return Err(EvaluationError::NonFinite { x, value });
    }

    Ok(value)
}
