//! CLI entry point for vergate.
//!
//! This module owns the `run()` function which:
//! - Parses CLI arguments (the gate takes none; behavior is fully determined
//!   by the presence/content of `config.yaml`)
//! - Initializes diagnostic logging
//! - Runs the gate pipeline against the current working directory
//! - Handles ALL output, success and failure alike
//!
//! main.rs only calls `std::process::exit(code.as_i32())` on error - it does
//! NOT print.

use clap::Parser;
use std::path::Path;

use crate::exit_codes::ExitCode;
use crate::{gate, logging};

/// vergate - SemVer gate for config.yaml
#[derive(Parser)]
#[command(name = "vergate")]
#[command(about = "Validates the version field of config.yaml against SemVer 2.0.0")]
#[command(long_about = r#"
vergate reads config.yaml from the current working directory, extracts the
top-level version field, and validates it against the Semantic Versioning
2.0.0 grammar. It is designed to gate build/release pipelines.

EXAMPLES:
  # Gate the release on the declared version
  vergate

EXIT CODES:
  0  version present and valid
  1  any failure: missing file, parse error, missing field, wrong type,
     invalid grammar

The gate takes no flags or arguments; behavior is fully determined by the
presence and content of config.yaml. Diagnostics can be enabled with
RUST_LOG=vergate=debug (they go to stderr and never change the verdict).
"#)]
#[command(version)]
pub struct Cli {}

/// Main CLI execution function.
///
/// This function handles ALL output including errors. It returns
/// `Result<(), ExitCode>`:
/// - On success: prints the confirmation line, returns `Ok(())`
/// - On error: prints the user-facing report, returns `Err(ExitCode)`
pub fn run() -> Result<(), ExitCode> {
    let _cli = Cli::parse();

    if let Err(err) = logging::init_tracing() {
        eprintln!("Warning: {err}");
    }

    match gate::evaluate(Path::new(".")) {
        Ok(version) => {
            println!("Version {version} is valid");
            Ok(())
        }
        Err(err) => {
            println!("{}", err.display_for_user());
            Err(err.to_exit_code())
        }
    }
}
