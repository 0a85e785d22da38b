// Shell command runner implementation
// reason: async-trait, tokio for async process management

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{info, warn};

use hostio_core::domain::CommandOutput;
use hostio_core::port::CommandRunner;
use hostio_core::{HostIoError, Result};

/// Shell runner
///
/// Runs a command string through the system shell and buffers the full
/// output until exit. No timeout, no sandboxing, no streaming: a
/// hanging command hangs the returned future.
pub struct ShellRunner;

impl ShellRunner {
    #[cfg(unix)]
    fn shell_command(command: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }

    #[cfg(windows)]
    fn shell_command(command: &str) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<CommandOutput> {
        info!(command = %command, "Spawning shell command");

        let child = Self::shell_command(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| HostIoError::SpawnFailed(e.to_string()))?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| HostIoError::Io(e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            warn!(
                command = %command,
                exit_code = ?output.status.code(),
                "Shell command failed"
            );
            return Err(HostIoError::CommandFailed {
                code: output.status.code(),
                stderr,
            });
        }

        info!(
            command = %command,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "Shell command completed"
        );

        Ok(CommandOutput { stdout, stderr })
    }
}
