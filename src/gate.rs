//! The version gate pipeline.
//!
//! A single-shot, synchronous pipeline: configuration resource → extracted
//! field → grammar check. Each invocation is independent and stateless; the
//! only side effects live at the CLI boundary.

use std::path::Path;
use tracing::debug;

use crate::config;
use crate::error::GateError;
use crate::semver::{self, VersionParts};

/// Run the gate against the configuration in `dir`.
///
/// Returns the validated version string on success. On failure, returns the
/// specific [`GateError`]; the caller decides how to report it.
pub fn evaluate(dir: &Path) -> Result<String, GateError> {
    let version = config::load_version(dir)?;
    debug!(version = %version, "extracted version field");

    if !semver::is_valid(&version) {
        return Err(GateError::InvalidVersion { version });
    }

    if let Some(parts) = VersionParts::parse(&version) {
        debug!(
            major = %parts.major,
            minor = %parts.minor,
            patch = %parts.patch,
            prerelease = parts.prerelease.as_deref().unwrap_or(""),
            buildmetadata = parts.buildmetadata.as_deref().unwrap_or(""),
            "version components"
        );
    }

    Ok(version)
}
