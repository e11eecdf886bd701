use crate::bisection::{Interval, Root};

/// A sub-interval the scan could not search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Skipped {
    /// The sub-interval that was abandoned.
    pub interval: Interval,

    /// Why evaluation failed.
    pub reason: String,
}

/// Distinct roots found by a scan, sorted ascending by value.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct RootSet {
    roots: Vec<Root>,
    skipped: Vec<Skipped>,
}

impl RootSet {
    /// Sorts candidates and merges any within `dedup_epsilon` of the last kept
    /// root, keeping whichever has the smaller error estimate.
    pub(super) fn from_candidates(
        mut candidates: Vec<Root>,
        dedup_epsilon: f64,
        skipped: Vec<Skipped>,
    ) -> Self {
        candidates.sort_by(|a, b| a.value.total_cmp(&b.value));

        let mut roots: Vec<Root> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            match roots.last_mut() {
                Some(kept) if (candidate.value - kept.value).abs() < dedup_epsilon => {
                    if candidate.error < kept.error {
                        *kept = candidate;
                    }
                }
                _ => roots.push(candidate),
            }
        }

        Self { roots, skipped }
    }

    /// Returns the number of distinct roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns true if no roots were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns the roots as a slice, ascending by value.
    #[must_use]
    pub fn as_slice(&self) -> &[Root] {
        &self.roots
    }

    /// Iterates over the roots, ascending by value.
    pub fn iter(&self) -> std::slice::Iter<'_, Root> {
        self.roots.iter()
    }

    /// Iterates over the root values, ascending.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.roots.iter().map(|root| root.value)
    }

    /// Returns true if every root converged.
    #[must_use]
    pub fn all_converged(&self) -> bool {
        self.roots.iter().all(Root::is_converged)
    }

    /// Sub-intervals abandoned because the function failed to evaluate.
    #[must_use]
    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }
}

impl<'a> IntoIterator for &'a RootSet {
    type Item = &'a Root;
    type IntoIter = std::slice::Iter<'a, Root>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

impl IntoIterator for RootSet {
    type Item = Root;
    type IntoIter = std::vec::IntoIter<Root>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}
