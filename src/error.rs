//! Error types for the version gate with user-friendly reporting.
//!
//! `GateError` is the primary error type returned by vergate library
//! operations. It provides:
//! - Detailed error information for programmatic handling
//! - User-facing messages matching the gate's output contract
//! - Mapping to CLI exit codes for consistent error reporting
//!
//! Library code returns `GateError` and does NOT call `std::process::exit()`;
//! the CLI maps errors to exit codes and prints the user-facing report.

use crate::exit_codes::ExitCode;
use thiserror::Error;

/// Library-level error type for the version gate.
///
/// Every variant maps to [`ExitCode::FAILURE`]; the gate contract is binary.
/// Use [`user_message()`](Self::user_message) for the line printed to the
/// pipeline log, and [`display_for_user()`](Self::display_for_user) for the
/// full report including suggestion lines.
#[derive(Error, Debug)]
pub enum GateError {
    /// The configuration file does not exist in the working directory.
    #[error("config.yaml not found")]
    ConfigNotFound,

    /// The configuration file exists but is not valid YAML.
    #[error("parsing config.yaml: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// No `version` key at the top level, or its value is empty/falsy.
    #[error("no version field found in config.yaml")]
    VersionMissing,

    /// The `version` value is present and truthy but not a string scalar.
    #[error("version must be a string, got {found}")]
    VersionNotString {
        /// Name of the YAML type actually encountered.
        found: String,
    },

    /// The version string does not satisfy the SemVer 2.0.0 grammar.
    #[error("version '{version}' does not follow semantic versioning")]
    InvalidVersion {
        /// The offending version string, verbatim.
        version: String,
    },

    /// Reading the configuration file failed for a reason other than absence.
    #[error("reading config.yaml: {0}")]
    Io(#[from] std::io::Error),
}

impl GateError {
    /// Get the user-facing message for this error.
    ///
    /// These lines are the gate's output contract; CI logs and humans both
    /// read them, so the wording is stable.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigNotFound => "Error: config.yaml not found".to_string(),
            Self::ConfigParse(err) => format!("Error parsing config.yaml: {err}"),
            Self::VersionMissing => "Error: No version field found in config.yaml".to_string(),
            Self::VersionNotString { found } => {
                format!("Error: Version must be a string, got {found}")
            }
            Self::InvalidVersion { version } => {
                format!(
                    "Error: Version '{version}' does not follow semantic versioning (major.minor.patch)"
                )
            }
            Self::Io(err) => format!("Error reading config.yaml: {err}"),
        }
    }

    /// Get suggested follow-up lines for this error, if any.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidVersion { .. } => {
                vec!["Example valid versions: 1.0.0, 2.1.3, 0.1.0".to_string()]
            }
            _ => Vec::new(),
        }
    }

    /// Format the full user-facing report: message plus suggestion lines.
    pub fn display_for_user(&self) -> String {
        let mut lines = vec![self.user_message()];
        lines.extend(self.suggestions());
        lines.join("\n")
    }

    /// Map this error to a CLI exit code.
    ///
    /// The gate contract is binary: every failure is exit code 1.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}
