//! Script extraction from a `package.json` manifest.
//!
//! Only the top-level `scripts` field is interpreted; the rest of the
//! manifest schema is ignored. Malformed entries degrade silently: a
//! missing or non-object `scripts` field yields an empty table, and
//! individual entries with an empty name or a non-string command are
//! dropped without warning. Only an unreadable or undecodable file is an
//! error, and that one surfaces to the process boundary.

use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Script name to command string, ordered by name.
pub type ScriptTable = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load the script table from a manifest file.
///
/// JSON object keys are strings by construction, so the only name-side
/// filter is the empty string; value-side, anything but a string is
/// skipped.
pub fn load_scripts(manifest_path: &Path) -> Result<ScriptTable, ScriptError> {
    let raw = std::fs::read_to_string(manifest_path).map_err(|source| ScriptError::Read {
        path: manifest_path.to_path_buf(),
        source,
    })?;
    let doc: Value = serde_json::from_str(&raw).map_err(|source| ScriptError::Parse {
        path: manifest_path.to_path_buf(),
        source,
    })?;

    let mut table = ScriptTable::new();
    if let Some(scripts) = doc.get("scripts").and_then(Value::as_object) {
        for (name, command) in scripts {
            if name.is_empty() {
                continue;
            }
            if let Some(command) = command.as_str() {
                table.insert(name.clone(), command.to_string());
            }
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("package.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn extracts_string_entries() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            r#"{"name": "demo", "scripts": {"build": "tsc", "test": "jest"}}"#,
        );

        let table = load_scripts(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table["build"], "tsc");
        assert_eq!(table["test"], "jest");
    }

    #[test]
    fn drops_non_string_commands() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            r#"{"scripts": {"ok": "echo ok", "bad": 42, "worse": {"nested": true}, "null": null}}"#,
        );

        let table = load_scripts(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table["ok"], "echo ok");
    }

    #[test]
    fn drops_empty_names() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"scripts": {"": "echo hidden", "a": "echo a"}}"#);

        let table = load_scripts(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.contains_key("a"));
    }

    #[test]
    fn missing_scripts_field_is_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"name": "demo", "version": "1.0.0"}"#);

        assert!(load_scripts(&path).unwrap().is_empty());
    }

    #[test]
    fn non_object_scripts_field_is_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"scripts": ["build", "test"]}"#);

        assert!(load_scripts(&path).unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "{ not json");

        let err = load_scripts(&path).unwrap_err();
        assert!(matches!(err, ScriptError::Parse { .. }));
    }

    #[test]
    fn unreadable_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");

        let err = load_scripts(&path).unwrap_err();
        assert!(matches!(err, ScriptError::Read { .. }));
    }

    #[test]
    fn table_iterates_in_name_order() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            r#"{"scripts": {"zeta": "z", "alpha": "a", "Beta": "B"}}"#,
        );

        let table = load_scripts(&path).unwrap();
        let names: Vec<&str> = table.keys().map(String::as_str).collect();
        // Ordinal, case-sensitive: uppercase sorts before lowercase.
        assert_eq!(names, vec!["Beta", "alpha", "zeta"]);
    }
}
