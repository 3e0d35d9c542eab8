//! Shell command execution.

use crate::error::{DaykitError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use super::platform::{merge_stderr_script, shell_flag, shell_program};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output with standard error interleaved.
    pub stdout: String,

    /// Execution duration.
    pub duration: Duration,
}

/// Execute a shell command with stderr merged into stdout.
///
/// The whole script runs with stderr redirected, so output from every
/// command in it arrives in order. Anything the shell itself writes to
/// stderr before the redirect (a syntax error, say) is appended. There is
/// no timeout.
///
/// # Errors
///
/// Returns `CommandFailed` with no code when the shell cannot be spawned.
/// A command that runs and exits non-zero is not an error.
pub fn execute_merged(command: &str, cwd: Option<&Path>) -> Result<CommandResult> {
    let start = Instant::now();
    let script = merge_stderr_script(command);

    let mut cmd = Command::new(shell_program());
    cmd.arg(shell_flag());
    cmd.arg(&script);

    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Running `{}`", script);

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to spawn shell for `{}`: {}", command, e);
        DaykitError::CommandFailed {
            command: command.to_string(),
            code: None,
        }
    })?;

    let duration = start.elapsed();
    let exit_code = output.status.code();

    tracing::debug!("`{}` exited with {:?} after {:?}", command, exit_code, duration);

    let mut stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    stdout.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(CommandResult {
        exit_code,
        stdout,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_successful_command() {
        let result = execute_merged("echo hello", None).unwrap();

        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let result = execute_merged("exit 3", None).unwrap();

        assert_eq!(result.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn merged_streams_land_in_stdout() {
        let result = execute_merged("echo out; echo err 1>&2", None).unwrap();

        assert_eq!(result.stdout, "out\nerr\n");
    }

    #[cfg(unix)]
    #[test]
    fn merge_covers_every_command_in_script() {
        let result = execute_merged("echo first 1>&2; echo second 1>&2", None).unwrap();

        assert_eq!(result.stdout, "first\nsecond\n");
    }

    #[cfg(unix)]
    #[test]
    fn shell_syntax_error_is_captured() {
        let result = execute_merged("echo (", None).unwrap();

        assert_ne!(result.exit_code, Some(0));
        assert!(!result.stdout.is_empty());
    }

    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "x").unwrap();

        let cmd = if cfg!(target_os = "windows") {
            "dir /b"
        } else {
            "ls"
        };

        let result = execute_merged(cmd, Some(temp.path())).unwrap();

        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("marker.txt"));
    }
}
