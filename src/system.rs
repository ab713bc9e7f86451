use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;
use tokio::time::{timeout, Duration};

#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: i32,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{program} did not finish within {timeout_secs}s")]
    Timeout { program: String, timeout_secs: u64 },
    #[error("failed to execute {program}: {source}")]
    Io {
        program: String,
        source: std::io::Error,
    },
}

/// Runs `program` without a shell; the child is killed if the future is dropped.
pub async fn run_command(
    program: &str,
    args: &[String],
    timeout_secs: u64,
) -> Result<CommandOutput, CommandError> {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .kill_on_drop(true);

    let output = timeout(Duration::from_secs(timeout_secs), command.output())
        .await
        .map_err(|_| CommandError::Timeout {
            program: program.to_string(),
            timeout_secs,
        })?
        .map_err(|source| CommandError::Io {
            program: program.to_string(),
            source,
        })?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        status: output.status.code().unwrap_or(-1),
    })
}

#[cfg(test)]
mod tests {
    use super::{CommandError, run_command};

    #[tokio::test]
    async fn missing_program_is_an_io_error() {
        let error = run_command("check-mirth-no-such-binary", &[], 5)
            .await
            .expect_err("spawning a missing binary must fail");
        assert!(matches!(error, CommandError::Io { .. }));
    }
}
