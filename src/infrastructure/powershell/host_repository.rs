use crate::domain::repositories::HostRepository;
use crate::infrastructure::powershell::command::{PowerShellCommand, quote};
use anyhow::Result;
use async_trait::async_trait;

pub struct PowerShellHostRepository {
    powershell: PowerShellCommand,
}

impl PowerShellHostRepository {
    pub fn new(powershell: PowerShellCommand) -> Self {
        Self { powershell }
    }
}

fn rename_script(new_name: &str) -> String {
    format!("Rename-Computer -NewName {} -Force", quote(new_name))
}

fn update_script() -> String {
    [
        "if (-not (Get-Module -ListAvailable -Name PSWindowsUpdate)) { \
         Install-PackageProvider -Name NuGet -Force | Out-Null; \
         Install-Module -Name PSWindowsUpdate -Force -Scope CurrentUser }",
        "Import-Module PSWindowsUpdate",
        "Install-WindowsUpdate -AcceptAll -IgnoreReboot",
    ]
    .join("; ")
}

const RESTART_SCRIPT: &str = "Restart-Computer -Force";

#[async_trait]
impl HostRepository for PowerShellHostRepository {
    async fn rename_computer(&self, new_name: &str) -> Result<()> {
        let powershell = self.powershell.clone();
        let script = rename_script(new_name);
        let output = tokio::task::spawn_blocking(move || powershell.execute(&script)).await??;

        if !output.stdout.trim().is_empty() {
            tracing::info!("rename_computer output: {}", output.stdout.trim());
        }
        if !output.stderr.trim().is_empty() {
            tracing::warn!("rename_computer stderr: {}", output.stderr.trim());
        }
        Ok(())
    }

    async fn install_updates(&self) -> Result<()> {
        let powershell = self.powershell.clone();
        let script = update_script();
        tokio::task::spawn_blocking(move || powershell.execute_interactive(&script)).await?
    }

    async fn restart(&self) -> Result<()> {
        let powershell = self.powershell.clone();
        tokio::task::spawn_blocking(move || powershell.execute(RESTART_SCRIPT)).await??;
        Ok(())
    }
}
