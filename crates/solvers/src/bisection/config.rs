use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig")
)]
pub struct Config {
    max_iters: usize,
    function_tol: f64,
    interval_tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("function_tol must be finite and non-negative")]
    FunctionTol,

    #[error("interval_tol must be finite and non-negative")]
    IntervalTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-10, 1e-10).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated limits.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or any tolerance is negative or
    /// non-finite.
    pub fn new(max_iters: usize, function_tol: f64, interval_tol: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !function_tol.is_finite() || function_tol < 0.0 {
            return Err(ConfigError::FunctionTol);
        }
        if !interval_tol.is_finite() || interval_tol < 0.0 {
            return Err(ConfigError::IntervalTol);
        }

        Ok(Self {
            max_iters,
            function_tol,
            interval_tol,
        })
    }

    /// Returns the hard cap on loop iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance on `|f(midpoint)|`.
    #[must_use]
    pub fn function_tol(&self) -> f64 {
        self.function_tol
    }

    /// Returns the tolerance on the bracket half-width.
    #[must_use]
    pub fn interval_tol(&self) -> f64 {
        self.interval_tol
    }
}

#[cfg(feature = "serde-derive")]
#[derive(serde::Deserialize)]
struct RawConfig {
    max_iters: usize,
    function_tol: f64,
    interval_tol: f64,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.max_iters, raw.function_tol, raw.interval_tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 100);
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(Config::new(0, 1e-9, 1e-9), Err(ConfigError::MaxIters));
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(10, -1.0, 1e-9), Err(ConfigError::FunctionTol));
        assert_eq!(Config::new(10, 1e-9, f64::NAN), Err(ConfigError::IntervalTol));
    }

    #[test]
    fn zero_tolerances_are_allowed() {
        assert!(Config::new(10, 0.0, 0.0).is_ok());
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn deserialization_validates() {
        let config: Config =
            serde_json::from_str(r#"{"max_iters":50,"function_tol":1e-8,"interval_tol":1e-8}"#)
                .expect("valid config");
        assert_eq!(config.max_iters(), 50);

        let invalid =
            serde_json::from_str::<Config>(r#"{"max_iters":0,"function_tol":1e-8,"interval_tol":1e-8}"#);
        assert!(invalid.is_err());
    }
}
