use crate::domain::{entities::PackageAction, error::HostError, repositories::PackageRepository};
use crate::infrastructure::choco::command::ChocoCommand;
use crate::infrastructure::powershell::PowerShellCommand;
use anyhow::Result;
use async_trait::async_trait;

const BOOTSTRAP_SCRIPT: &str = "Set-ExecutionPolicy Bypass -Scope Process -Force; \
    [System.Net.ServicePointManager]::SecurityProtocol = \
    [System.Net.ServicePointManager]::SecurityProtocol -bor 3072; \
    iex ((New-Object System.Net.WebClient).DownloadString('https://community.chocolatey.org/install.ps1'))";

pub struct ChocoPackageRepository {
    choco: ChocoCommand,
    powershell: PowerShellCommand,
}

impl ChocoPackageRepository {
    pub fn new(choco: ChocoCommand, powershell: PowerShellCommand) -> Self {
        Self { choco, powershell }
    }
}

/// Extracts package ids from `--limit-output` text. Lines without a `|`
/// separator (banners, warnings) are skipped.
fn parse_limit_output(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter_map(|line| line.split_once('|'))
        .map(|(id, _version)| id.trim())
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

#[async_trait]
impl PackageRepository for ChocoPackageRepository {
    async fn list_installed_packages(&self) -> Result<Vec<String>> {
        let choco = self.choco.clone();
        let output = tokio::task::spawn_blocking(move || choco.list_local()).await??;
        Ok(parse_limit_output(&output))
    }

    async fn run_action(
        &self,
        action: PackageAction,
        package_id: &str,
        auto_confirm: bool,
    ) -> Result<i32> {
        let choco = self.choco.clone();
        let package_id = package_id.to_string();

        tokio::task::spawn_blocking(move || choco.run_action(action, &package_id, auto_confirm))
            .await?
    }

    async fn is_available(&self) -> Result<bool> {
        let choco = self.choco.clone();
        Ok(tokio::task::spawn_blocking(move || choco.resolve().is_some()).await?)
    }

    async fn bootstrap(&self) -> Result<()> {
        let powershell = self.powershell.clone();
        tracing::info!("Downloading and running the Chocolatey install script");

        tokio::task::spawn_blocking(move || powershell.execute_interactive(BOOTSTRAP_SCRIPT))
            .await?
            .map_err(|e| HostError::BootstrapFailed(format!("{:#}", e)).into())
    }
}
