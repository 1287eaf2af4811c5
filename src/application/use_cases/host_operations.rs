use crate::domain::{repositories::HostRepository, services::ComputerNameValidator};
use anyhow::Result;
use std::sync::Arc;

pub struct HostRepositoryUseCase {
    repository: Arc<dyn HostRepository>,
}

impl HostRepositoryUseCase {
    pub fn new(repository: Arc<dyn HostRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> Arc<dyn HostRepository> {
        Arc::clone(&self.repository)
    }
}

pub struct RenameComputer {
    use_case: HostRepositoryUseCase,
}

impl RenameComputer {
    pub fn new(repository: Arc<dyn HostRepository>) -> Self {
        Self {
            use_case: HostRepositoryUseCase::new(repository),
        }
    }

    pub async fn execute(&self, new_name: &str) -> Result<()> {
        let new_name = new_name.trim();
        ComputerNameValidator::validate(new_name)?;
        tracing::info!("Renaming computer to {}", new_name);
        self.use_case.repository().rename_computer(new_name).await
    }
}

pub struct InstallSystemUpdates {
    use_case: HostRepositoryUseCase,
}

impl InstallSystemUpdates {
    pub fn new(repository: Arc<dyn HostRepository>) -> Self {
        Self {
            use_case: HostRepositoryUseCase::new(repository),
        }
    }

    pub async fn execute(&self) -> Result<()> {
        tracing::info!("Installing operating system updates");
        self.use_case.repository().install_updates().await
    }
}

pub struct RestartComputer {
    use_case: HostRepositoryUseCase,
}

impl RestartComputer {
    pub fn new(repository: Arc<dyn HostRepository>) -> Self {
        Self {
            use_case: HostRepositoryUseCase::new(repository),
        }
    }

    pub async fn execute(&self) -> Result<()> {
        tracing::warn!("Restarting computer");
        self.use_case.repository().restart().await
    }
}
