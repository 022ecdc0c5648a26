//! Context payload parsing and working-directory resolution for `run`.
//!
//! The host supplies one JSON object on stdin, shaped like
//! `{"args": {...}, "ctx": {"cwd": "...", ...}}`. Only `ctx.cwd` matters
//! here. Empty input is a valid empty payload; anything that parses but is
//! not an object is a fatal misuse of the protocol. A `ctx` that is absent
//! or not an object degrades to empty rather than erroring.
//!
//! Environment and process state are threaded in as arguments so resolution
//! stays a pure function of its inputs.

use serde_json::Value;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable the host sets as the fallback working directory.
pub const CWD_ENV_VAR: &str = "PKGTASK_CWD";

/// Parsed `run` payload. Only the fields this plugin consumes survive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunPayload {
    /// `ctx.cwd` when present and a non-empty string.
    pub cwd: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid input JSON: {0}")]
    Invalid(#[from] serde_json::Error),
    #[error("input JSON must be an object")]
    NotObject,
}

/// Parse the raw stdin text into a [`RunPayload`].
///
/// Empty or whitespace-only input is the empty payload. `ctx.cwd` counts
/// only when it is a non-empty string; an empty string falls through to the
/// next precedence level, matching the host contract's falsy semantics.
pub fn parse_payload(raw: &str) -> Result<RunPayload, PayloadError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(RunPayload::default());
    }

    let doc: Value = serde_json::from_str(trimmed)?;
    let Value::Object(payload) = doc else {
        return Err(PayloadError::NotObject);
    };

    let cwd = payload
        .get("ctx")
        .and_then(Value::as_object)
        .and_then(|ctx| ctx.get("cwd"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);

    Ok(RunPayload { cwd })
}

/// Resolve the effective working directory for a run.
///
/// Precedence: payload `ctx.cwd`, then the host's fallback environment
/// variable (empty value treated as unset), then the process's own current
/// directory.
pub fn resolve_workdir(
    payload: &RunPayload,
    env_cwd: Option<&OsStr>,
    process_cwd: &Path,
) -> PathBuf {
    if let Some(cwd) = &payload.cwd {
        return cwd.clone();
    }
    if let Some(env_cwd) = env_cwd.filter(|v| !v.is_empty()) {
        return PathBuf::from(env_cwd);
    }
    process_cwd.to_path_buf()
}
