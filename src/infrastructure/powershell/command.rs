use crate::domain::error::HostError;
use anyhow::{Context, Result};
use std::process::{Command, Stdio};

pub struct PowerShellOutput {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone)]
pub struct PowerShellCommand {
    executable: String,
}

impl PowerShellCommand {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    fn base_command(&self, script: &str) -> Command {
        let mut command = Command::new(&self.executable);
        command.args([
            "-NoProfile",
            "-NonInteractive",
            "-ExecutionPolicy",
            "Bypass",
            "-Command",
            script,
        ]);
        command
    }

    /// Runs a script and captures its output. A non-zero exit is an error.
    pub fn execute(&self, script: &str) -> Result<PowerShellOutput> {
        tracing::debug!("Running PowerShell: {}", script);

        let output = self
            .base_command(script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("Failed to run {}", self.executable))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(HostError::CommandFailed {
                program: self.executable.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: stderr.trim().to_string(),
            }
            .into());
        }

        Ok(PowerShellOutput { stdout, stderr })
    }

    /// Runs a long script with the console attached so its progress is visible.
    pub fn execute_interactive(&self, script: &str) -> Result<()> {
        tracing::debug!("Running PowerShell (attached): {}", script);

        let status = self
            .base_command(script)
            .stdin(Stdio::null())
            .status()
            .with_context(|| format!("Failed to run {}", self.executable))?;

        if !status.success() {
            return Err(HostError::CommandFailed {
                program: self.executable.clone(),
                code: status.code().unwrap_or(-1),
                stderr: String::new(),
            }
            .into());
        }

        Ok(())
    }
}

/// Wraps a value in a PowerShell single-quoted literal.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
