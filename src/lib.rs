//! vergate - SemVer gate for config.yaml
//!
//! This crate validates the `version` field of a `config.yaml` file against
//! the Semantic Versioning 2.0.0 grammar, for use as a gate in build/release
//! pipelines: the process exits 0 when the declared version is present and
//! valid, and 1 for any failure (missing file, parse error, missing field,
//! wrong type, invalid grammar).
//!
//! vergate can be used in two ways:
//! - **CLI**: Install via `cargo install vergate` and run it in the directory
//!   containing `config.yaml`
//! - **Library**: Add as a dependency and call [`gate::evaluate`] or
//!   [`semver::is_valid`] directly
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! cargo install vergate
//!
//! # In a directory with config.yaml:
//! vergate
//! # Version 1.2.3 is valid
//! ```
//!
//! # Quick Start (Library)
//!
//! ```rust
//! use vergate::semver;
//!
//! assert!(semver::is_valid("1.2.3-alpha.1+build.5"));
//! assert!(!semver::is_valid("01.2.3"));
//! ```
//!
//! # Stable Public API
//!
//! The following types are part of the stable public API for 1.x releases:
//!
//! - [`GateError`] - Library error type
//! - [`ExitCode`] - CLI exit codes
//! - [`gate::evaluate`] - The gate pipeline
//! - [`semver::is_valid`] and [`semver::VersionParts`] - Grammar validation

pub mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod gate;
pub mod logging;
pub mod semver;

pub use error::GateError;
pub use exit_codes::ExitCode;
