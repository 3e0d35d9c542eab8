//! Platform-specific shell selection.

/// Shell used to run commands.
///
/// A plain non-interactive shell: the runner command is a build tool
/// invocation and does not need the user's interactive profile.
pub fn shell_program() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

/// Flag that passes a command string to [`shell_program`].
pub fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

/// Wrap `command` so stderr of every command in it goes to stdout.
pub fn merge_stderr_script(command: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("({}) 2>&1", command)
    } else {
        format!("exec 2>&1; {}", command)
    }
}

/// Check if running in a CI environment.
///
/// Used to force non-interactive output in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
