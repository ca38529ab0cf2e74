//! Command-line front end for `hasher`: hashes arguments or runs the
//! known-answer table and reports pass/fail counts.

mod self_test;

use std::io::Write;

use anyhow::Context;
use clap::{ArgAction, Parser};

pub use self_test::{SelfTestReport, run_self_test};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "hasher")]
#[command(about = "Print MD5 hex digests of UTF-8 text", long_about = None)]
pub struct Cli {
    /// Text to hash; each argument is hashed separately
    #[arg(name = "TEXT")]
    pub texts: Vec<String>,

    /// Run the built-in known-answer tests (default when no TEXT is given)
    #[arg(long)]
    pub self_test: bool,

    /// Increase log verbosity (-v debug, -vv trace); `RUST_LOG` overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default `tracing` filter directive for the chosen verbosity.
    #[must_use]
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "hasher=debug",
            _ => "hasher=trace",
        }
    }
}

/// Runs the command, writing results to `out`. Returns `false` if any
/// self-test case failed.
///
/// # Errors
///
/// Fails if hashing an argument fails or `out` cannot be written.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<bool> {
    if cli.self_test || cli.texts.is_empty() {
        let report = run_self_test(out)?;
        tracing::info!(
            passed = report.passed,
            total = report.total,
            "self test finished"
        );
        return Ok(report.all_passed());
    }

    for text in &cli.texts {
        let hex = hasher::hash_hex(text).with_context(|| format!("hashing {text:?}"))?;
        writeln!(out, "{hex}  {text}")?;
    }
    Ok(true)
}
