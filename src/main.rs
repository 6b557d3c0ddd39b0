//! check-lfs CLI entry point.
//!
//! Intended to run as a pre-commit hook. Arguments are ignored; the exit code
//! and the single instructional line on stdout are the whole interface.

use std::process::ExitCode;

use check_lfs::git_lfs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by the `RUST_LOG` environment variable; the
/// default is INFO. Diagnostics go to stderr; stdout carries nothing but
/// the instructional line.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("check_lfs=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let check = git_lfs();

    match check.run() {
        Ok(report) => {
            tracing::debug!(
                "{} verified: {} (version {})",
                check.name(),
                report.reported,
                report.version.as_deref().unwrap_or("unknown")
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!("{} verification failed: {}", check.name(), err);
            // Every failure collapses to the same hint and exit code.
            println!("{}", check.install_hint());
            ExitCode::from(1)
        }
    }
}
