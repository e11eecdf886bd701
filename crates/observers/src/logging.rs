use log::{Level, log, log_enabled};

use rootscan_core::Observer;
use rootscan_solvers::bisection::{Action, Event};

/// Writes every bisection step through the [`log`] facade.
///
/// Never requests an action, so attaching it does not change the result.
/// Nothing is printed unless the application installs a logger (for example
/// `simplelog::TermLogger`) that enables `level` for `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
    target: &'static str,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl LogObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            target: "rootscan::bisection",
        }
    }

    /// Overrides the log target.
    #[must_use]
    pub fn with_target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }

    /// Returns the level events are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the log target.
    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl Observer<Event<'_>, Action> for LogObserver {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        if log_enabled!(target: self.target, self.level) {
            let interval = event.interval();
            log!(
                target: self.target,
                self.level,
                "iter {:>3}  a = {:<22}  b = {:<22}  c = {:<22}  f(c) = {:e}  error = {:e}",
                event.iter(),
                interval.low(),
                interval.high(),
                event.x(),
                event.value(),
                event.record.half_width(),
            );
        }
        None
    }
}
