//! pkgtask - package.json script tasks for an orchestrator.
//!
//! Command implementations for the binary. The binary entry point only
//! parses arguments, wires up process state (stdin, environment, current
//! directory, PATH), and maps results to exit codes; everything else lives
//! here so tests can drive the commands directly.

pub mod describe;
pub mod run;

/// Clean success.
pub const EXIT_OK: i32 = 0;
/// Handled, reported condition: unknown script, manifest not found at run
/// time, or a malformed command line.
pub const EXIT_FAILURE: i32 = 1;
/// Protocol or configuration misuse: malformed/non-object stdin payload,
/// no resolvable package manager. Deliberately distinct from the handled
/// exit 1 cases.
pub const EXIT_FATAL: i32 = 2;
