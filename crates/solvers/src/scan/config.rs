use thiserror::Error;

use crate::bisection::Config;

/// Configuration for a multi-root scan.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawScanConfig")
)]
pub struct ScanConfig {
    step: f64,
    dedup_epsilon: f64,
    bisection: Config,
}

/// Errors that can occur when validating a scan config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanConfigError {
    #[error("step must be finite and positive")]
    Step,

    #[error("dedup_epsilon must be finite and positive")]
    DedupEpsilon,
}

impl Default for ScanConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 1e-6, Config::default()).unwrap()
    }
}

impl ScanConfig {
    /// Creates a new scan config.
    ///
    /// `dedup_epsilon` should normally exceed the bisection tolerances, so
    /// two runs that converge on the same root from neighbouring
    /// sub-intervals are recognized as one root.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` or `dedup_epsilon` is non-positive or
    /// non-finite.
    pub fn new(step: f64, dedup_epsilon: f64, bisection: Config) -> Result<Self, ScanConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ScanConfigError::Step);
        }
        if !dedup_epsilon.is_finite() || dedup_epsilon <= 0.0 {
            return Err(ScanConfigError::DedupEpsilon);
        }

        Ok(Self {
            step,
            dedup_epsilon,
            bisection,
        })
    }

    /// Returns the sub-interval width.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the minimum separation between distinct roots.
    #[must_use]
    pub fn dedup_epsilon(&self) -> f64 {
        self.dedup_epsilon
    }

    /// Returns the config used for each bisection run.
    #[must_use]
    pub fn bisection(&self) -> &Config {
        &self.bisection
    }
}

#[cfg(feature = "serde-derive")]
#[derive(serde::Deserialize)]
struct RawScanConfig {
    step: f64,
    dedup_epsilon: f64,
    bisection: Config,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<RawScanConfig> for ScanConfig {
    type Error = ScanConfigError;

    fn try_from(raw: RawScanConfig) -> Result<Self, Self::Error> {
        Self::new(raw.step, raw.dedup_epsilon, raw.bisection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = ScanConfig::default();
        assert!(config.dedup_epsilon() > config.bisection().function_tol());
    }

    #[test]
    fn rejects_bad_step() {
        let bisection = Config::default();
        assert_eq!(
            ScanConfig::new(0.0, 1e-6, bisection),
            Err(ScanConfigError::Step)
        );
        assert_eq!(
            ScanConfig::new(f64::INFINITY, 1e-6, bisection),
            Err(ScanConfigError::Step)
        );
    }

    #[test]
    fn rejects_bad_epsilon() {
        assert_eq!(
            ScanConfig::new(0.1, 0.0, Config::default()),
            Err(ScanConfigError::DedupEpsilon)
        );
    }
}
