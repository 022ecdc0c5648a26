//! The `run` command: execute one named script via the selected runner.
//!
//! Process state (stdin contents, environment snapshot, current directory,
//! executable probe) is threaded in as arguments; the only side effect is
//! the one child-process spawn. Diagnostics for handled conditions go to
//! stderr and map to exit codes here; unreadable manifests and spawn
//! failures propagate to the process boundary.

use crate::{EXIT_FAILURE, EXIT_FATAL};
use pkgtask_core::{
    find_manifest, load_scripts, parse_payload, pick_runner, resolve_workdir, RunnerChoice,
    ToolProbe,
};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Run `task_name` and return the exit code this process should report.
///
/// Handled conditions (missing manifest, unknown script) come back as
/// `Ok(1)`; payload and runner misuse as `Ok(2)`; a launched child's exact
/// exit code otherwise.
pub fn run_task(
    task_name: &str,
    raw_payload: &str,
    env_cwd: Option<&OsStr>,
    process_cwd: &Path,
    probe: &dyn ToolProbe,
) -> eyre::Result<i32> {
    let payload = match parse_payload(raw_payload) {
        Ok(payload) => payload,
        Err(err) => {
            eprintln!("{err}");
            return Ok(EXIT_FATAL);
        }
    };

    let workdir = resolve_workdir(&payload, env_cwd, process_cwd);
    let Some(manifest_path) = find_manifest(&workdir) else {
        eprintln!("package.json not found from current context");
        return Ok(EXIT_FAILURE);
    };
    debug!(manifest = %manifest_path.display(), "located manifest");

    let scripts = load_scripts(&manifest_path)?;
    if !scripts.contains_key(task_name) {
        eprintln!("unknown script: {task_name}");
        return Ok(EXIT_FAILURE);
    }

    let project_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    let choice = match pick_runner(project_dir, probe) {
        Ok(choice) => choice,
        Err(err) => {
            eprintln!("{err}");
            return Ok(EXIT_FATAL);
        }
    };
    debug!(
        runner = choice.manager.program(),
        program = %choice.program.display(),
        "selected runner"
    );

    // Inherited stdio: the child's streams pass straight through.
    let status = Command::new(&choice.program)
        .arg(RunnerChoice::RUN_SUBCOMMAND)
        .arg(task_name)
        .current_dir(project_dir)
        .status()?;
    Ok(exit_code(status))
}

/// Map a child's exit status to this process's exit code.
///
/// Signal death has no code to propagate verbatim; report it shell-style.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    EXIT_FAILURE
}
