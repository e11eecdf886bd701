//! Plain-text tables for solver results.
//!
//! Renderers only read their inputs. They are meant for terminals and log
//! output:
//!
//! ```rust
//! use rootscan_core::reference::Cubic;
//! use rootscan_observers::table;
//! use rootscan_solvers::bisection::{Config, bisect_unobserved};
//!
//! let result = bisect_unobserved(&Cubic, 2.0, 3.0, &Config::default()).unwrap();
//!
//! println!("{}", table::iteration_table(&result.log));
//! println!("{}", table::root_summary(&result.root));
//! ```

use tabled::{builder::Builder, settings::Style};

use rootscan_solvers::{
    bisection::{IterationLog, Root, Status},
    scan::RootSet,
};

/// Text returned by [`iteration_table`] for an empty log.
pub const EMPTY_LOG: &str = "No iteration data available.";

/// Text returned by [`root_set_table`] when no roots were found.
pub const NO_ROOTS: &str = "No roots found.";

/// Renders one row per iteration: the bracket `[a, b]`, midpoint `c`,
/// `f(c)`, the error estimate (half-width) and the full bracket width.
#[must_use]
pub fn iteration_table(log: &IterationLog) -> String {
    if log.is_empty() {
        return EMPTY_LOG.to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Iter", "a", "b", "c", "f(c)", "Error", "Width"]);
    for record in log {
        let interval = record.interval();
        builder.push_record([
            record.iter().to_string(),
            format!("{:.6}", interval.low()),
            format!("{:.6}", interval.high()),
            format!("{:.6}", record.midpoint()),
            format!("{:.6e}", record.value()),
            format!("{:.6e}", record.half_width()),
            format!("{:.6e}", interval.width()),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}

/// Renders the outcome of a single bisection run.
#[must_use]
pub fn root_summary(root: &Root) -> String {
    let (status, label) = if root.is_converged() {
        ("Converged successfully".to_string(), "Root")
    } else {
        (
            format!("Did not converge ({})", describe(root.status)),
            "Approximate root",
        )
    };

    let mut builder = Builder::default();
    builder.push_record(["Status".to_string(), status]);
    builder.push_record([label.to_string(), format!("{:.10}", root.value)]);
    builder.push_record(["Function value".to_string(), format!("{:.2e}", root.residual)]);
    builder.push_record(["Iterations".to_string(), root.iters.to_string()]);
    builder.push_record(["Final error".to_string(), format!("{:.2e}", root.error)]);

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}

/// Renders every root of a scan, followed by any skipped sub-intervals.
#[must_use]
pub fn root_set_table(roots: &RootSet) -> String {
    let mut out = if roots.is_empty() {
        NO_ROOTS.to_string()
    } else {
        let mut builder = Builder::default();
        builder.push_record(["#", "Root", "f(root)", "Error", "Iterations", "Status", "Bracket"]);
        for (i, root) in roots.iter().enumerate() {
            builder.push_record([
                (i + 1).to_string(),
                format!("{:.10}", root.value),
                format!("{:.2e}", root.residual),
                format!("{:.2e}", root.error),
                root.iters.to_string(),
                describe(root.status).to_string(),
                format!("[{}, {}]", root.interval.low(), root.interval.high()),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.to_string()
    };

    for skipped in roots.skipped() {
        out.push_str(&format!(
            "\nskipped [{}, {}]: {}",
            skipped.interval.low(),
            skipped.interval.high(),
            skipped.reason,
        ));
    }

    out
}

fn describe(status: Status) -> &'static str {
    match status {
        Status::ExactRoot => "exact root",
        Status::ResidualConverged => "residual converged",
        Status::IntervalConverged => "interval converged",
        Status::MaxIters => "max iterations reached",
        Status::StoppedByObserver => "stopped by observer",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootscan_core::{from_fn, reference::Cubic};
    use rootscan_solvers::{
        bisection::{Config, bisect_unobserved},
        scan::{ScanConfig, find_all_roots},
    };

    #[test]
    fn iteration_table_has_a_row_per_record() {
        let result = bisect_unobserved(&Cubic, -2.0, -1.0, &Config::default()).unwrap();
        let table = iteration_table(&result.log);

        assert!(table.contains("f(c)"));
        assert!(table.contains("-1.500000"));
        // Header plus one row per record, each framed by a rounded border.
        let rows = table.lines().filter(|line| line.starts_with('│')).count();
        assert_eq!(rows, result.log.len() + 1);
    }

    #[test]
    fn empty_log_has_placeholder() {
        let result = bisect_unobserved(&Cubic, 0.0, 1.0, &Config::default()).unwrap();
        assert_eq!(iteration_table(&result.log), EMPTY_LOG);
    }

    #[test]
    fn summary_reports_convergence() {
        let result = bisect_unobserved(&Cubic, 2.0, 3.0, &Config::default()).unwrap();
        let summary = root_summary(&result.root);

        assert!(summary.contains("Converged successfully"));
        assert!(summary.contains("2.5615528128"));
    }

    #[test]
    fn summary_reports_iteration_cap() {
        let config = Config::new(3, 0.0, 0.0).unwrap();
        let result = bisect_unobserved(&Cubic, 2.0, 3.0, &config).unwrap();
        let summary = root_summary(&result.root);

        assert!(summary.contains("Did not converge (max iterations reached)"));
        assert!(summary.contains("Approximate root"));
    }

    #[test]
    fn root_set_lists_roots_and_skips() {
        let roots = find_all_roots(&Cubic, [-3.0, 4.0], &ScanConfig::default()).unwrap();
        let table = root_set_table(&roots);
        assert!(table.contains("-1.5615528128"));
        assert!(table.contains("2.5615528128"));
        assert!(!table.contains("skipped"));

        let reciprocal = from_fn(|x| 1.0 / x);
        let roots = find_all_roots(&reciprocal, [-1.0, 1.0], &ScanConfig::default()).unwrap();
        let table = root_set_table(&roots);
        assert!(table.starts_with(NO_ROOTS));
        assert!(table.contains("skipped"));
    }
}
