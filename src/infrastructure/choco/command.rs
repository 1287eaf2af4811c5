use crate::domain::{entities::PackageAction, error::HostError};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Thin wrapper over the `choco` executable.
#[derive(Debug, Clone)]
pub struct ChocoCommand {
    executable: String,
}

impl ChocoCommand {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Finds the executable on PATH, then in the default install location.
    ///
    /// A freshly bootstrapped install is not on this process's PATH yet, hence
    /// the fallback.
    pub fn resolve(&self) -> Option<PathBuf> {
        if let Ok(path) = which::which(&self.executable) {
            return Some(path);
        }

        let file_name = self.file_name();
        install_roots()
            .into_iter()
            .map(|root| root.join("bin").join(&file_name))
            .find(|candidate| candidate.is_file())
    }

    /// File name looked up under the install roots, `.exe` added if missing.
    fn file_name(&self) -> String {
        if Path::new(&self.executable).extension().is_some() {
            self.executable.clone()
        } else {
            format!("{}.exe", self.executable)
        }
    }

    fn program(&self) -> Result<PathBuf> {
        self.resolve()
            .ok_or_else(|| HostError::PackageManagerUnavailable(self.executable.clone()).into())
    }

    fn execute_choco(&self, args: &[&str]) -> Result<String> {
        let program = self.program()?;
        tracing::debug!("Running: {} {}", program.display(), args.join(" "));

        let output = Command::new(&program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to run {}", program.display()))?;

        if !output.status.success() {
            return Err(HostError::CommandFailed {
                program: self.executable.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// `choco list --limit-output`: one `id|version` line per local package.
    pub fn list_local(&self) -> Result<String> {
        let result = self.execute_choco(&["list", "--limit-output"])?;
        tracing::debug!("choco list returned {} bytes", result.len());
        Ok(result)
    }

    /// Runs install/uninstall with the console attached so progress stays
    /// visible, and hands back the raw exit code.
    pub fn run_action(
        &self,
        action: PackageAction,
        package_id: &str,
        auto_confirm: bool,
    ) -> Result<i32> {
        let program = self.program()?;
        let mut args = vec![action.verb(), package_id];
        if auto_confirm {
            args.push("-y");
        }
        tracing::debug!("Running: {} {}", program.display(), args.join(" "));

        let status = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .status()
            .with_context(|| format!("Failed to run {}", program.display()))?;

        // No code means the process was killed by a signal.
        Ok(status.code().unwrap_or(-1))
    }
}

fn install_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Some(root) = std::env::var_os("ChocolateyInstall") {
        roots.push(PathBuf::from(root));
    }
    if let Some(program_data) = std::env::var_os("ProgramData") {
        roots.push(PathBuf::from(program_data).join("chocolatey"));
    }
    roots
}
