//! The reference cubic `f(x) = x³ − x² − 4x`.
//!
//! Factoring gives `x (x² − x − 4)`, so the three roots are `0` and
//! `(1 ± √17) / 2`. All three lie in the default domain `[-3, 4]`.

use std::convert::Infallible;

use crate::Function;

/// Negative root, `(1 − √17) / 2`.
pub const NEGATIVE_ROOT: f64 = -1.561_552_812_808_830_3;

/// Root at the origin.
pub const ZERO_ROOT: f64 = 0.0;

/// Positive root, `(1 + √17) / 2`.
pub const POSITIVE_ROOT: f64 = 2.561_552_812_808_830_3;

/// The reference cubic `f(x) = x³ − x² − 4x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cubic;

impl Function for Cubic {
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(x.powi(3) - x.powi(2) - 4.0 * x)
    }

    fn label(&self) -> Option<&str> {
        Some("x^3 - x^2 - 4x")
    }

    fn domain(&self) -> Option<[f64; 2]> {
        Some([-3.0, 4.0])
    }
}
