//! Manifest discovery: nearest `package.json` lookup.
//!
//! The walk covers the starting directory and every ancestor up to the
//! filesystem root, nearest first. A missing manifest is a normal outcome
//! communicated as `None`, not an error.

use std::path::{Path, PathBuf};

/// File name the locator matches literally in each candidate directory.
pub const MANIFEST_NAME: &str = "package.json";

/// Find the nearest `package.json`, checking `start` then each ancestor.
///
/// Only regular files count; a directory named `package.json` is skipped
/// and the walk continues upward.
pub fn find_manifest(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(MANIFEST_NAME))
        .find(|candidate| candidate.is_file())
}
