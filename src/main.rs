//! # linkver
//!
//! **linkver** verifies that dependencies symlinked into `node_modules`
//! are checked out at a git revision consistent with the version range
//! declared in `package.json`.
//!
//! It is meant as a pre-commit or CI hygiene check: it catches commits and
//! test runs made against a linked dependency whose working tree has
//! drifted from the tagged version the manifest asks for.
//!
//! This CLI is built with [clap](https://docs.rs/clap).

use clap::Parser;
use linkver::{CheckOutcome, cmd_check};
use std::path::Path;
use std::process::ExitCode;

/// Command-line interface definition.
///
/// Parsed using `clap` derive macros. The tool takes no flags, arguments or
/// subcommands; a bare invocation checks the current directory.
#[derive(Parser, Debug)]
#[command(
    name = "linkver",
    version,
    about = "linkver - check linked dependency checkouts against package.json"
)]
struct Cli {}

/// CLI entry point.
///
/// Runs the check against the process working directory and maps the
/// outcome to the exit status: `0` when every linked dependency matches
/// (or there is nothing to check), `1` on any mismatch or fatal error.
fn main() -> ExitCode {
    let _cli = Cli::parse();

    match cmd_check(Path::new(".")) {
        Ok(CheckOutcome::Clean) => ExitCode::SUCCESS,
        Ok(CheckOutcome::Mismatch) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
