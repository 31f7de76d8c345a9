//! Thin wrapper around external toolchain invocations.
//!
//! Every command runs with an explicit working directory instead of
//! chdir-ing the scaffolder itself, so later steps never depend on
//! ambient process state.

use anyhow::Result;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::ScaffoldError;

/// Bail early with a readable message when a required tool is missing,
/// rather than surfacing a spawn error halfway through the run.
pub fn require(program: &str) -> Result<()> {
    if which::which(program).is_err() {
        anyhow::bail!(
            "`{}` is not installed or not on PATH. Install Node.js and try again.",
            program
        );
    }
    Ok(())
}

/// Run a command to completion in `cwd`, inheriting stdio so the user sees
/// the tool's own output. Non-zero exit is an `ExternalToolFailure`.
pub fn run(program: &str, args: &[&str], cwd: &Path) -> Result<(), ScaffoldError> {
    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .map_err(|e| ScaffoldError::tool(program, e.to_string()))?;

    if !status.success() {
        return Err(ScaffoldError::tool(
            program,
            format!("exited with status {status}"),
        ));
    }
    Ok(())
}

/// Spawn a command detached in `cwd` and return immediately. The child
/// outlives the scaffolder; its stdio is discarded.
pub fn spawn_detached(program: &str, args: &[&str], cwd: &Path) -> Result<(), ScaffoldError> {
    Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ScaffoldError::tool(program, e.to_string()))?;
    Ok(())
}
