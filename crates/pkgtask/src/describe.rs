//! The `describe` command: emit the task catalog.

use pkgtask_core::build_catalog;
use std::io::Write;
use std::path::Path;

/// Build the catalog for `start_dir` and write it as one line of JSON.
///
/// An absent manifest is a valid empty catalog; only an unreadable or
/// undecodable manifest (or a write failure) errors, and those surface to
/// the process boundary.
pub fn describe(start_dir: &Path, out: &mut impl Write) -> eyre::Result<()> {
    let catalog = build_catalog(start_dir)?;
    serde_json::to_writer(&mut *out, &catalog)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_one_terminated_json_line() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"scripts": {"start": "node ."}}"#,
        )
        .unwrap();

        let mut out = Vec::new();
        describe(dir.path(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);

        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["schemaVersion"], 1);
        assert_eq!(parsed["tasks"][0]["name"], "start");
    }

    #[test]
    fn empty_catalog_without_manifest() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("no/manifest/here");
        fs::create_dir_all(&nested).unwrap();

        let mut out = Vec::new();
        describe(&nested, &mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["tasks"], serde_json::json!([]));
    }

    #[test]
    fn unreadable_manifest_errors() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "not json at all").unwrap();

        let mut out = Vec::new();
        assert!(describe(dir.path(), &mut out).is_err());
    }
}
