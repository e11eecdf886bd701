use thiserror::Error;

use rootscan_core::Function;

use crate::evaluate::evaluate;

use super::Error;

/// Errors that can occur when creating an [`Interval`] or validating a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,

    /// Function values at the endpoints share a sign.
    #[error("no sign change: f({low}) = {f_low}, f({high}) = {f_high}")]
    NoSignChange {
        low: f64,
        high: f64,
        f_low: f64,
        f_high: f64,
    },
}

/// A finite interval with `low < high`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    /// Validates and orders the endpoints.
    ///
    /// Reversed endpoints are swapped.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub fn new(a: f64, b: f64) -> Result<Self, BracketError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::ZeroWidth);
        }

        if a < b {
            Ok(Self { low: a, high: b })
        } else {
            Ok(Self { low: b, high: a })
        }
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the endpoints as `[low, high]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Returns `high - low`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Returns `(high - low) / 2`, the bisection error estimate.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        (self.high - self.low) / 2.0
    }

    /// Returns `(low + high) / 2`.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Returns true if `x` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    /// Returns true if `x` lies strictly between the endpoints.
    ///
    /// A midpoint that fails this check means the endpoints are adjacent
    /// floats and the interval cannot be split further.
    pub(super) fn strictly_contains(&self, x: f64) -> bool {
        self.low < x && x < self.high
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = BracketError;

    fn try_from(value: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(value[0], value[1])
    }
}

impl From<Interval> for [f64; 2] {
    fn from(interval: Interval) -> Self {
        interval.as_array()
    }
}

/// The sign of a function value for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Value is positive (or zero).
    Positive,
    /// Value is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a function value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// An interval whose endpoint values have opposite, non-zero signs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    interval: Interval,
    low_sign: Sign,
    high_sign: Sign,
}

impl Bracket {
    /// Creates a bracket from an interval and its endpoint values.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if the values share a sign.
    fn new(interval: Interval, f_low: f64, f_high: f64) -> Result<Self, BracketError> {
        let low_sign = Sign::of(f_low);
        let high_sign = Sign::of(f_high);

        if low_sign == high_sign {
            return Err(BracketError::NoSignChange {
                low: interval.low,
                high: interval.high,
                f_low,
                f_high,
            });
        }

        Ok(Self {
            interval,
            low_sign,
            high_sign,
        })
    }

    /// Returns the current interval.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the sign of the function at the lower endpoint.
    #[must_use]
    pub fn low_sign(&self) -> Sign {
        self.low_sign
    }

    /// Returns the sign of the function at the upper endpoint.
    #[must_use]
    pub fn high_sign(&self) -> Sign {
        self.high_sign
    }

    /// Replaces the endpoint whose sign matches `sign` with `x`.
    ///
    /// `x` must lie strictly inside the interval.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        debug_assert!(self.interval.strictly_contains(x));
        if self.low_sign == sign {
            self.interval.low = x;
        } else {
            self.interval.high = x;
        }
    }
}

/// Result of validating a candidate bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BracketOutcome {
    /// The function is exactly zero at this endpoint.
    ImmediateRoot(f64),

    /// The endpoints have opposite signs, so the interval holds a root.
    Valid(Bracket),
}

/// Checks whether `[a, b]` brackets a sign change of `function`.
///
/// Both endpoints are evaluated. An exact zero at `low` (then `high`) is
/// reported as [`BracketOutcome::ImmediateRoot`]; opposite signs give
/// [`BracketOutcome::Valid`]. Reversed endpoints are reordered.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if the endpoints are non-finite, equal,
/// or share a sign, and [`Error::Evaluation`] if either evaluation fails.
pub fn validate_bracket<F>(function: &F, a: f64, b: f64) -> Result<BracketOutcome, Error>
where
    F: Function + ?Sized,
{
    classify(function, Interval::new(a, b)?)
}

/// Classifies an already-ordered interval.
pub(crate) fn classify<F>(function: &F, interval: Interval) -> Result<BracketOutcome, Error>
where
    F: Function + ?Sized,
{
    let f_low = evaluate(function, interval.low)?;
    let f_high = evaluate(function, interval.high)?;

    #[allow(clippy::float_cmp)]
    if f_low == 0.0 {
        return Ok(BracketOutcome::ImmediateRoot(interval.low));
    }

    #[allow(clippy::float_cmp)]
    if f_high == 0.0 {
        return Ok(BracketOutcome::ImmediateRoot(interval.high));
    }

    Ok(BracketOutcome::Valid(Bracket::new(interval, f_low, f_high)?))
}
