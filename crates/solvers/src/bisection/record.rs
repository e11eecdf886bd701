use super::bracket::Interval;

/// One step of a bisection run.
///
/// Records are created by the solver and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    iter: usize,
    interval: Interval,
    midpoint: f64,
    value: f64,
    half_width: f64,
}

impl IterationRecord {
    pub(super) fn new(iter: usize, interval: Interval, midpoint: f64, value: f64) -> Self {
        Self {
            iter,
            interval,
            midpoint,
            value,
            half_width: interval.half_width(),
        }
    }

    /// Iteration counter (1-based).
    #[must_use]
    pub fn iter(&self) -> usize {
        self.iter
    }

    /// The bracket that was split in this step.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// The midpoint of [`interval`](Self::interval).
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.midpoint
    }

    /// The function value at the midpoint.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Half the bracket width, the error estimate for this step.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }
}

/// Append-only accumulator for the records of a single run.
#[derive(Debug, Default)]
pub(super) struct Recorder {
    records: Vec<IterationRecord>,
}

impl Recorder {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn push(&mut self, record: IterationRecord) {
        debug_assert_eq!(record.iter, self.records.len() + 1);
        self.records.push(record);
    }

    pub(super) fn finish(self) -> IterationLog {
        IterationLog {
            records: self.records,
        }
    }
}

/// The ordered records of a completed bisection run.
///
/// Records appear in iteration order. The log is read-only; it is produced
/// once per call and shares nothing with other runs.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct IterationLog {
    records: Vec<IterationRecord>,
}

impl IterationLog {
    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no iterations ran (e.g. an endpoint was an exact root).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[IterationRecord] {
        &self.records
    }

    /// Iterates over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, IterationRecord> {
        self.records.iter()
    }

    /// Returns the first record, if any.
    #[must_use]
    pub fn first(&self) -> Option<&IterationRecord> {
        self.records.first()
    }

    /// Returns the last record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&IterationRecord> {
        self.records.last()
    }
}

impl<'a> IntoIterator for &'a IterationLog {
    type Item = &'a IterationRecord;
    type IntoIter = std::slice::Iter<'a, IterationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for IterationLog {
    type Item = IterationRecord;
    type IntoIter = std::vec::IntoIter<IterationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn record(iter: usize, low: f64, high: f64) -> IterationRecord {
        let interval = Interval::new(low, high).expect("valid interval");
        IterationRecord::new(iter, interval, interval.midpoint(), 0.5)
    }

    #[test]
    fn record_derives_half_width() {
        let record = record(1, -2.0, -1.0);
        assert_relative_eq!(record.half_width(), 0.5);
        assert_relative_eq!(record.midpoint(), -1.5);
    }

    #[test]
    fn recorder_preserves_order() {
        let mut recorder = Recorder::new();
        recorder.push(record(1, 0.0, 4.0));
        recorder.push(record(2, 0.0, 2.0));
        recorder.push(record(3, 1.0, 2.0));

        let log = recorder.finish();

        assert_eq!(log.len(), 3);
        let iters: Vec<usize> = log.iter().map(IterationRecord::iter).collect();
        assert_eq!(iters, [1, 2, 3]);
        assert_relative_eq!(log.last().unwrap().half_width(), 0.5);
    }

    #[test]
    fn empty_log() {
        let log = Recorder::new().finish();
        assert!(log.is_empty());
        assert!(log.first().is_none());
    }
}
