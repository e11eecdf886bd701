//! Solves the reference cubic `x³ − x² − 4x` and prints the reports.
//!
//! Usage:
//!
//! ```sh
//! cargo run -p rootscan-observers --example reference [trace|debug|info|warn]
//! ```
//!
//! Each textbook bracket is bisected with [`LogObserver`] attached, then the
//! whole default domain is scanned. The optional argument sets the log level
//! (default `info`).

use log::{Level, LevelFilter, error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

use rootscan_core::{Function, reference::Cubic};
use rootscan_observers::{LogObserver, table};
use rootscan_solvers::{
    bisection::{self, bisect},
    reference::REFERENCE_BRACKETS,
    scan::{ScanConfig, find_all_roots_in_domain},
};

fn main() {
    let level = match std::env::args().nth(1).as_deref() {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("warn") => LevelFilter::Warn,
        Some("info") | None => LevelFilter::Info,
        Some(other) => {
            eprintln!("unknown log level `{other}`, expected trace, debug, info or warn");
            std::process::exit(2);
        }
    };

    if CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .is_err()
    {
        eprintln!("a logger is already installed");
    }

    let config = bisection::Config::default();
    let label = Cubic.label().unwrap_or("f(x)");
    println!("f(x) = {label}\n");

    for bracket in REFERENCE_BRACKETS {
        let [a, b] = bracket.interval;
        println!("{} on [{a}, {b}]", bracket.name);

        match bisect(&Cubic, a, b, &config, LogObserver::new(Level::Debug)) {
            Ok(result) => {
                println!("{}", table::iteration_table(&result.log));
                println!("{}\n", table::root_summary(&result.root));
            }
            Err(err) => error!("{}: {err}", bracket.name),
        }
    }

    match find_all_roots_in_domain(&Cubic, &ScanConfig::default()) {
        Ok(roots) => {
            info!("scan finished, all converged: {}", roots.all_converged());
            println!("{}", table::root_set_table(&roots));
        }
        Err(err) => error!("scan failed: {err}"),
    }
}
