use crate::application::use_cases::*;
use crate::domain::entities::AppConfig;
use crate::domain::repositories::{HostRepository, PackageRepository};
use std::sync::Arc;

pub struct UseCaseContainer {
    pub reconcile: Arc<ReconcileSelection>,
    pub ensure_package_manager: Arc<EnsurePackageManager>,
    pub rename_computer: Arc<RenameComputer>,
    pub install_updates: Arc<InstallSystemUpdates>,
    pub restart: Arc<RestartComputer>,
}

impl UseCaseContainer {
    pub fn new(
        package_repository: Arc<dyn PackageRepository>,
        host_repository: Arc<dyn HostRepository>,
        config: &AppConfig,
    ) -> Self {
        let probe = Arc::new(ProbeInstalledState::new(Arc::clone(&package_repository)));
        let install = Arc::new(InstallPackage::new(Arc::clone(&package_repository)));
        let uninstall = Arc::new(UninstallPackage::new(Arc::clone(&package_repository)));

        Self {
            reconcile: Arc::new(ReconcileSelection::new(probe, install, uninstall)),
            ensure_package_manager: Arc::new(EnsurePackageManager::new(
                Arc::clone(&package_repository),
                config.package_manager.clone(),
                config.auto_bootstrap,
            )),
            rename_computer: Arc::new(RenameComputer::new(Arc::clone(&host_repository))),
            install_updates: Arc::new(InstallSystemUpdates::new(Arc::clone(&host_repository))),
            restart: Arc::new(RestartComputer::new(Arc::clone(&host_repository))),
        }
    }
}
