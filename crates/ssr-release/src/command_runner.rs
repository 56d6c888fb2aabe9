use crate::ReleaseResult;

use std::{
    path::Path,
    process::{Command, Stdio},
};

use tracing::debug;

/// Exit status of a finished subprocess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Whether the process exited successfully.
    pub success: bool,
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
}

/// Runs external commands one at a time, waiting for each to exit.
pub trait CommandRunner {
    /// Run `command_line` through the platform shell in `cwd`.
    fn run(&mut self, command_line: &str, cwd: &Path) -> ReleaseResult<CommandOutcome>;
}

/// Runs commands through the system shell with output streamed live to the
/// terminal. No timeout.
#[derive(Debug, Default)]
pub struct ShellCommandRunner;

impl CommandRunner for ShellCommandRunner {
    fn run(&mut self, command_line: &str, cwd: &Path) -> ReleaseResult<CommandOutcome> {
        debug!(command = command_line, cwd = ?cwd, "Spawning");

        let mut command = if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.arg("/C").arg(command_line);
            command
        } else {
            let mut command = Command::new("sh");
            command.arg("-c").arg(command_line);
            command
        };

        let status = command
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(CommandOutcome {
            success: status.success(),
            code: status.code(),
        })
    }
}
