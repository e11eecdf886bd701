use super::{bracket::Interval, record::IterationRecord};

/// Event emitted by the bisection solver once per iteration.
///
/// The event is emitted after the midpoint is evaluated and recorded, and
/// before the solver checks its termination criteria.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The record for this iteration.
    pub record: &'a IterationRecord,
}

impl Event<'_> {
    /// Iteration counter (1-based).
    #[must_use]
    pub fn iter(&self) -> usize {
        self.record.iter()
    }

    /// The evaluated midpoint.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.record.midpoint()
    }

    /// The function value at the midpoint.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.record.value()
    }

    /// The bracket being split.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.record.interval()
    }
}
