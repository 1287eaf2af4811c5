use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait HostRepository: Send + Sync {
    async fn rename_computer(&self, new_name: &str) -> Result<()>;
    async fn install_updates(&self) -> Result<()>;
    async fn restart(&self) -> Result<()>;
}
