//! Configuration loading and version extraction.
//!
//! The gate reads a single resource: `config.yaml` in the working directory.
//! The file is parsed as a YAML document and the top-level `version` key is
//! extracted. The resource is read-only; nothing here mutates it.

use serde_yaml::Value;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use crate::error::GateError;

/// Fixed name of the configuration resource, resolved against the working
/// directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Load `config.yaml` from `dir` and extract the `version` field.
///
/// # Errors
///
/// - [`GateError::ConfigNotFound`] if the file is absent
/// - [`GateError::ConfigParse`] if the file is not valid YAML
/// - [`GateError::VersionMissing`] if the `version` key is absent or its
///   value is empty/falsy
/// - [`GateError::VersionNotString`] if the value is not a string scalar
pub fn load_version(dir: &Path) -> Result<String, GateError> {
    let path = dir.join(CONFIG_FILE);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(GateError::ConfigNotFound);
        }
        Err(err) => return Err(GateError::Io(err)),
    };

    let config: Value = serde_yaml::from_str(&contents)?;
    debug!(path = %path.display(), "loaded configuration");

    extract_version(&config)
}

/// Look up the top-level `version` key in a parsed document.
///
/// A document that is not a mapping (empty file, scalar, sequence) has no
/// `version` key and is reported the same way as a mapping without one.
fn extract_version(config: &Value) -> Result<String, GateError> {
    let Some(value) = config.get("version") else {
        return Err(GateError::VersionMissing);
    };

    if is_falsy(value) {
        return Err(GateError::VersionMissing);
    }

    match value {
        Value::String(version) => Ok(version.clone()),
        other => Err(GateError::VersionNotString {
            found: type_name(other).to_string(),
        }),
    }
}

/// Whether a YAML value is empty/falsy: null, `false`, zero, or an empty
/// string/sequence/mapping.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Tagged(tagged) => is_falsy(&tagged.value),
    }
}

/// Name of a YAML value's type, for error reports.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn dir_with_config(contents: &str) -> TempDir {
        let dir = TempDir::new().expect("create temp dir");
        fs::write(dir.path().join(CONFIG_FILE), contents).expect("write config.yaml");
        dir
    }

    #[test]
    fn test_string_version_is_extracted() {
        let dir = dir_with_config("version: 1.2.3\n");
        let version = load_version(dir.path()).expect("version should load");
        assert_eq!(version, "1.2.3");
    }

    #[test]
    fn test_quoted_version_is_extracted() {
        let dir = dir_with_config("version: \"2.0.0\"\nname: demo\n");
        let version = load_version(dir.path()).expect("version should load");
        assert_eq!(version, "2.0.0");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().expect("create temp dir");
        let err = load_version(dir.path()).expect_err("missing file should fail");
        assert!(matches!(err, GateError::ConfigNotFound), "got {err:?}");
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = dir_with_config("version: [unclosed\n");
        let err = load_version(dir.path()).expect_err("invalid YAML should fail");
        assert!(matches!(err, GateError::ConfigParse(_)), "got {err:?}");
    }

    #[test]
    fn test_missing_key_is_reported() {
        let dir = dir_with_config("name: demo\n");
        let err = load_version(dir.path()).expect_err("missing key should fail");
        assert!(matches!(err, GateError::VersionMissing), "got {err:?}");
    }

    #[test]
    fn test_empty_document_is_reported_as_missing() {
        let dir = dir_with_config("");
        let err = load_version(dir.path()).expect_err("empty document should fail");
        assert!(matches!(err, GateError::VersionMissing), "got {err:?}");
    }

    #[test]
    fn test_non_mapping_document_is_reported_as_missing() {
        let dir = dir_with_config("- 1.2.3\n- 4.5.6\n");
        let err = load_version(dir.path()).expect_err("sequence document should fail");
        assert!(matches!(err, GateError::VersionMissing), "got {err:?}");
    }

    #[test]
    fn test_null_version_is_reported_as_missing() {
        let dir = dir_with_config("version:\n");
        let err = load_version(dir.path()).expect_err("null version should fail");
        assert!(matches!(err, GateError::VersionMissing), "got {err:?}");
    }

    #[test]
    fn test_empty_string_version_is_reported_as_missing() {
        let dir = dir_with_config("version: \"\"\n");
        let err = load_version(dir.path()).expect_err("empty version should fail");
        assert!(matches!(err, GateError::VersionMissing), "got {err:?}");
    }

    #[test]
    fn test_zero_version_is_reported_as_missing() {
        // Falsy values are classified as missing, not as a type error.
        let dir = dir_with_config("version: 0\n");
        let err = load_version(dir.path()).expect_err("zero version should fail");
        assert!(matches!(err, GateError::VersionMissing), "got {err:?}");
    }

    #[test]
    fn test_numeric_version_is_type_error() {
        let dir = dir_with_config("version: 1.0\n");
        let err = load_version(dir.path()).expect_err("numeric version should fail");
        match err {
            GateError::VersionNotString { found } => assert_eq!(found, "number"),
            other => panic!("expected VersionNotString, got {other:?}"),
        }
    }

    #[test]
    fn test_sequence_version_is_type_error() {
        let dir = dir_with_config("version:\n  - 1.2.3\n");
        let err = load_version(dir.path()).expect_err("sequence version should fail");
        match err {
            GateError::VersionNotString { found } => assert_eq!(found, "sequence"),
            other => panic!("expected VersionNotString, got {other:?}"),
        }
    }

    #[test]
    fn test_boolean_version_true_is_type_error() {
        let dir = dir_with_config("version: true\n");
        let err = load_version(dir.path()).expect_err("boolean version should fail");
        match err {
            GateError::VersionNotString { found } => assert_eq!(found, "boolean"),
            other => panic!("expected VersionNotString, got {other:?}"),
        }
    }

    #[test]
    fn test_boolean_version_false_is_falsy() {
        let dir = dir_with_config("version: false\n");
        let err = load_version(dir.path()).expect_err("false version should fail");
        assert!(matches!(err, GateError::VersionMissing), "got {err:?}");
    }
}
