use crate::domain::entities::PackageAction;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// Identifiers of every locally installed package. Empty when nothing is installed.
    async fn list_installed_packages(&self) -> Result<Vec<String>>;

    /// Runs install or uninstall for one package and returns the process exit code.
    async fn run_action(
        &self,
        action: PackageAction,
        package_id: &str,
        auto_confirm: bool,
    ) -> Result<i32>;

    async fn is_available(&self) -> Result<bool>;
    async fn bootstrap(&self) -> Result<()>;
}
