//! SemVer 2.0.0 grammar validation.
//!
//! The pattern below is the official Semantic Versioning 2.0.0 regular
//! expression, preserved verbatim. The named capture groups (`major`,
//! `minor`, `patch`, `prerelease`, `buildmetadata`) document the grammar;
//! matching behavior does not depend on them. The pattern is anchored, so the
//! entire string must conform.

use regex::Regex;
use std::sync::LazyLock;

/// The SemVer 2.0.0 pattern from <https://semver.org>.
static SEMVER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )
    .unwrap()
});

/// Check whether `version` satisfies the SemVer 2.0.0 grammar.
///
/// The check is purely syntactic: `major`, `minor`, and `patch` must each be
/// `0` or a non-zero-leading decimal integer, an optional pre-release after
/// `-` must consist of dot-separated identifiers (numeric identifiers may not
/// have leading zeros), and optional build metadata after `+` is dot-separated
/// alphanumeric/hyphen identifiers with no numeric constraint.
pub fn is_valid(version: &str) -> bool {
    SEMVER_PATTERN.is_match(version)
}

/// Components of a version string that matched the grammar.
///
/// Components are kept as written; the grammar constrains their shape, not
/// their magnitude, so numeric parts are not converted to integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionParts {
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub prerelease: Option<String>,
    pub buildmetadata: Option<String>,
}

impl VersionParts {
    /// Extract the components of `version`, or `None` if it does not match
    /// the grammar.
    pub fn parse(version: &str) -> Option<Self> {
        let caps = SEMVER_PATTERN.captures(version)?;
        Some(Self {
            major: caps["major"].to_string(),
            minor: caps["minor"].to_string(),
            patch: caps["patch"].to_string(),
            prerelease: caps.name("prerelease").map(|m| m.as_str().to_string()),
            buildmetadata: caps.name("buildmetadata").map(|m| m.as_str().to_string()),
        })
    }
}
