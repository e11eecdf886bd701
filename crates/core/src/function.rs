use std::{convert::Infallible, error::Error as StdError, marker::PhantomData};

/// A real-valued function of one real variable.
///
/// Implementors return `Err` when the function is undefined at `x` (division
/// by zero, a domain violation, and so on). Solvers additionally treat a
/// non-finite `Ok` value as a failure, so implementors do not need to check
/// for NaN or infinity themselves.
pub trait Function {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function is undefined at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;

    /// A human-readable label, such as `"x^3 - x^2 - 4x"`.
    fn label(&self) -> Option<&str> {
        None
    }

    /// The default search domain as `[low, high]`, if the function has one.
    fn domain(&self) -> Option<[f64; 2]> {
        None
    }
}

impl<T: Function + ?Sized> Function for &T {
    type Error = T::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).call(x)
    }

    fn label(&self) -> Option<&str> {
        (**self).label()
    }

    fn domain(&self) -> Option<[f64; 2]> {
        (**self).domain()
    }
}

/// A [`Function`] backed by an infallible closure.
#[derive(Debug, Clone)]
pub struct FnFunction<F> {
    function: F,
    label: Option<String>,
    domain: Option<[f64; 2]>,
}

impl<F> FnFunction<F>
where
    F: Fn(f64) -> f64,
{
    /// Wraps a closure with no label and no default domain.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            label: None,
            domain: None,
        }
    }

    /// Attaches a human-readable label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attaches a default search domain.
    #[must_use]
    pub fn with_domain(mut self, domain: [f64; 2]) -> Self {
        self.domain = Some(domain);
        self
    }
}

impl<F> Function for FnFunction<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.function)(x))
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn domain(&self) -> Option<[f64; 2]> {
        self.domain
    }
}

/// A [`Function`] backed by a fallible closure.
pub struct TryFnFunction<F, E> {
    function: F,
    label: Option<String>,
    domain: Option<[f64; 2]>,
    _marker: PhantomData<fn() -> E>,
}

impl<F, E> TryFnFunction<F, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    /// Wraps a fallible closure with no label and no default domain.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            label: None,
            domain: None,
            _marker: PhantomData,
        }
    }

    /// Attaches a human-readable label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attaches a default search domain.
    #[must_use]
    pub fn with_domain(mut self, domain: [f64; 2]) -> Self {
        self.domain = Some(domain);
        self
    }
}

impl<F, E> Function for TryFnFunction<F, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.function)(x)
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn domain(&self) -> Option<[f64; 2]> {
        self.domain
    }
}

/// Wraps an infallible closure as a [`Function`].
pub const fn from_fn<F>(function: F) -> FnFunction<F>
where
    F: Fn(f64) -> f64,
{
    FnFunction::new(function)
}

/// Wraps a fallible closure as a [`Function`].
pub const fn try_from_fn<F, E>(function: F) -> TryFnFunction<F, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    TryFnFunction::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt;

    use approx::assert_relative_eq;

    #[derive(Debug)]
    struct NegativeInput(f64);

    impl fmt::Display for NegativeInput {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "negative input {}", self.0)
        }
    }

    impl StdError for NegativeInput {}

    #[test]
    fn closure_evaluates() {
        let square = from_fn(|x| x * x);
        assert_relative_eq!(square.call(3.0).unwrap(), 9.0);
        assert!(square.label().is_none());
        assert!(square.domain().is_none());
    }

    #[test]
    fn closure_carries_label_and_domain() {
        let f = from_fn(|x| x - 1.0)
            .with_label("x - 1")
            .with_domain([-2.0, 2.0]);

        assert_eq!(f.label(), Some("x - 1"));
        assert_eq!(f.domain(), Some([-2.0, 2.0]));
    }

    #[test]
    fn fallible_closure_reports_errors() {
        let sqrt = try_from_fn(|x: f64| {
            if x < 0.0 {
                Err(NegativeInput(x))
            } else {
                Ok(x.sqrt())
            }
        });

        assert_relative_eq!(sqrt.call(4.0).unwrap(), 2.0);
        assert!(sqrt.call(-1.0).is_err());
    }

    #[test]
    fn references_forward_to_the_function() {
        let f = from_fn(|x| 2.0 * x).with_label("2x");
        let by_ref = &f;

        assert_relative_eq!(by_ref.call(1.5).unwrap(), 3.0);
        assert_eq!(by_ref.label(), Some("2x"));
    }
}
