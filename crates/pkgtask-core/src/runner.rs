//! Runner selection among the interchangeable package managers.
//!
//! The selection policy prefers the runner implied by a lockfile actually
//! present in the project directory before falling back to whichever
//! generic runner happens to be installed. The fallback chain is an ordered
//! sequence of checks evaluated with short-circuit; the order carries the
//! policy and must not be rearranged.
//!
//! Executable lookup goes through the [`ToolProbe`] seam so selection is a
//! pure function of its arguments in tests.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The package managers this tool knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Pnpm,
    Yarn,
    Npm,
}

impl PackageManager {
    /// Executable name looked up on the search path.
    pub fn program(self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Npm => "npm",
        }
    }

    /// Lockfile whose presence marks a project as managed by this tool.
    ///
    /// npm's lockfile carries no weight in selection; npm is only ever the
    /// generic fallback.
    pub fn lockfile(self) -> Option<&'static str> {
        match self {
            Self::Pnpm => Some("pnpm-lock.yaml"),
            Self::Yarn => Some("yarn.lock"),
            Self::Npm => None,
        }
    }
}

/// A selected runner: the manager plus the resolved executable path.
///
/// The invocation prefix is `<program> run`; the executor appends the task
/// name and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerChoice {
    pub manager: PackageManager,
    pub program: PathBuf,
}

impl RunnerChoice {
    /// Subcommand that follows the program in every invocation.
    pub const RUN_SUBCOMMAND: &'static str = "run";
}

#[derive(Debug, Error)]
#[error("no package manager found (npm/yarn/pnpm)")]
pub struct ToolNotFound;

/// Resolves a program name to an executable, if one is installed.
pub trait ToolProbe {
    fn resolve(&self, program: &str) -> Option<PathBuf>;
}

/// Probe that searches the directories of a PATH-style variable.
#[derive(Debug, Clone)]
pub struct PathProbe {
    search_path: OsString,
}

impl PathProbe {
    /// Probe over the process's own `PATH`.
    pub fn from_env() -> Self {
        Self {
            search_path: std::env::var_os("PATH").unwrap_or_default(),
        }
    }

    /// Probe over an explicit PATH-style string.
    pub fn new(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: search_path.into(),
        }
    }
}

impl ToolProbe for PathProbe {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        std::env::split_paths(&self.search_path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .flat_map(|dir| candidate_names(program).map(move |name| dir.join(name)))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(unix)]
fn candidate_names(program: &str) -> impl Iterator<Item = String> {
    std::iter::once(program.to_string())
}

#[cfg(windows)]
fn candidate_names(program: &str) -> impl Iterator<Item = String> {
    // npm and yarn install as .cmd shims on windows.
    [
        program.to_string(),
        format!("{program}.exe"),
        format!("{program}.cmd"),
    ]
    .into_iter()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(windows)]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Select the runner for `project_dir`.
///
/// Priority, strictly in order:
/// 1. pnpm lockfile present and pnpm resolvable
/// 2. yarn lockfile present and yarn resolvable
/// 3. npm resolvable
/// 4. yarn resolvable
/// 5. pnpm resolvable
pub fn pick_runner(
    project_dir: &Path,
    probe: &dyn ToolProbe,
) -> Result<RunnerChoice, ToolNotFound> {
    use PackageManager::{Npm, Pnpm, Yarn};

    for manager in [Pnpm, Yarn] {
        let Some(lockfile) = manager.lockfile() else {
            continue;
        };
        if project_dir.join(lockfile).is_file() {
            if let Some(program) = probe.resolve(manager.program()) {
                return Ok(RunnerChoice { manager, program });
            }
        }
    }
    for manager in [Npm, Yarn, Pnpm] {
        if let Some(program) = probe.resolve(manager.program()) {
            return Ok(RunnerChoice { manager, program });
        }
    }
    Err(ToolNotFound)
}
