//! External execution collaborator.

use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

use anyhow::Context as _;

use crate::error::RadianceResult;

/// Run a fully-rendered command line and block until it exits.
///
/// Piping and redirection syntax is shell-level, so the line is handed to
/// `sh -c` (`cmd /C` on Windows) rather than spawned directly. Environment
/// overrides are layered over the parent environment. The exit code is
/// returned as data; `-1` stands for termination by signal.
pub fn run_command(
    command_line: &str,
    env: Option<&HashMap<String, String>>,
    cwd: Option<&Path>,
) -> RadianceResult<i32> {
    let mut command = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.args(["/C", command_line]);
        c
    } else {
        let mut c = Command::new("sh");
        c.args(["-c", command_line]);
        c
    };

    if let Some(vars) = env {
        command.envs(vars);
    }
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let status = command
        .status()
        .with_context(|| format!("failed to spawn shell for '{command_line}'"))?;
    Ok(status.code().unwrap_or(-1))
}
