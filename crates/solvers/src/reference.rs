//! Named brackets for the reference cubic `x³ − x² − 4x`.
//!
//! Each bracket isolates exactly one root of
//! [`Cubic`](rootscan_core::reference::Cubic). They are the standard way to
//! check a bisection configuration end to end.

use rootscan_core::reference::Cubic;

use crate::bisection::{Bisection, Config, Error, Interval, bisect_unobserved};

/// A named search interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceBracket {
    pub name: &'static str,
    pub interval: [f64; 2],
}

/// One bracket per root of the reference cubic, ascending.
pub const REFERENCE_BRACKETS: [ReferenceBracket; 3] = [
    ReferenceBracket {
        name: "x1 (negative root)",
        interval: [-2.0, -1.0],
    },
    ReferenceBracket {
        name: "x2 (zero root)",
        interval: [-0.5, 0.5],
    },
    ReferenceBracket {
        name: "x3 (positive root)",
        interval: [2.0, 3.0],
    },
];

/// The result of bisecting one reference bracket.
#[derive(Debug)]
pub struct ReferenceOutcome {
    pub name: &'static str,
    pub interval: [f64; 2],
    pub result: Result<Bisection, Error>,
}

impl ReferenceOutcome {
    /// Returns the bracket as a validated interval, if it is one.
    #[must_use]
    pub fn bracket(&self) -> Option<Interval> {
        Interval::new(self.interval[0], self.interval[1]).ok()
    }
}

/// Bisects every reference bracket with `config`.
///
/// Failures are reported per bracket, so one bad run never hides the others.
#[must_use]
pub fn solve_reference_brackets(config: &Config) -> Vec<ReferenceOutcome> {
    REFERENCE_BRACKETS
        .iter()
        .map(|bracket| {
            let [a, b] = bracket.interval;
            ReferenceOutcome {
                name: bracket.name,
                interval: bracket.interval,
                result: bisect_unobserved(&Cubic, a, b, config),
            }
        })
        .collect()
}
