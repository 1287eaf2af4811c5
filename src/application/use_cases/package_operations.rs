use crate::domain::{
    entities::{
        ActionOutcome, ActionStatus, CatalogEntry, FailureReason, PackageAction, ReconcileReport,
        Selection,
    },
    error::HostError,
    repositories::PackageRepository,
};
use anyhow::Result;
use std::sync::Arc;

pub struct ProbeInstalledState {
    repository: Arc<dyn PackageRepository>,
}

impl ProbeInstalledState {
    pub fn new(repository: Arc<dyn PackageRepository>) -> Self {
        Self { repository }
    }

    /// Point-in-time check against the package manager's local inventory.
    pub async fn execute(&self, package_id: &str) -> Result<bool> {
        let installed = self.repository.list_installed_packages().await?;
        let found = installed
            .iter()
            .any(|id| id.trim().eq_ignore_ascii_case(package_id));
        tracing::debug!(
            "Probed {}: {} ({} packages installed)",
            package_id,
            if found { "installed" } else { "absent" },
            installed.len()
        );
        Ok(found)
    }
}

async fn run_package_action(
    repository: &Arc<dyn PackageRepository>,
    action: PackageAction,
    entry: &CatalogEntry,
) -> ActionStatus {
    tracing::info!("{} {} ({})", action, entry.display_name, entry.package_id);

    match repository.run_action(action, &entry.package_id, true).await {
        Ok(code) => {
            let status = ActionStatus::from_exit_code(code);
            if status.is_success() {
                tracing::info!("{} of {} succeeded", action, entry.package_id);
            } else {
                tracing::error!("{} of {} exited with {}", action, entry.package_id, code);
            }
            status
        }
        Err(e) => {
            tracing::error!("Failed to {} {}: {:#}", action.verb(), entry.package_id, e);
            ActionStatus::Failure(FailureReason::Launch(format!("{:#}", e)))
        }
    }
}

pub struct InstallPackage {
    repository: Arc<dyn PackageRepository>,
}

impl InstallPackage {
    pub fn new(repository: Arc<dyn PackageRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, entry: &CatalogEntry) -> ActionStatus {
        run_package_action(&self.repository, PackageAction::Install, entry).await
    }
}

pub struct UninstallPackage {
    repository: Arc<dyn PackageRepository>,
}

impl UninstallPackage {
    pub fn new(repository: Arc<dyn PackageRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, entry: &CatalogEntry) -> ActionStatus {
        run_package_action(&self.repository, PackageAction::Uninstall, entry).await
    }
}

/// Flips the installed state of every selected package, one at a time.
///
/// A failed item is recorded and the batch moves on; nothing is rolled back.
pub struct ReconcileSelection {
    probe: Arc<ProbeInstalledState>,
    install: Arc<InstallPackage>,
    uninstall: Arc<UninstallPackage>,
}

impl ReconcileSelection {
    pub fn new(
        probe: Arc<ProbeInstalledState>,
        install: Arc<InstallPackage>,
        uninstall: Arc<UninstallPackage>,
    ) -> Self {
        Self {
            probe,
            install,
            uninstall,
        }
    }

    pub async fn execute(&self, selection: &Selection) -> ReconcileReport {
        tracing::debug!("Reconciling selection {:?}", selection.package_ids());
        let mut report = ReconcileReport::new();

        for entry in selection.entries() {
            let installed = match self.probe.execute(&entry.package_id).await {
                Ok(installed) => installed,
                Err(e) => {
                    tracing::error!("Could not probe {}: {:#}", entry.package_id, e);
                    report.push(ActionOutcome::new(
                        entry.clone(),
                        PackageAction::Install,
                        ActionStatus::Failure(FailureReason::ProbeFailed(format!("{:#}", e))),
                    ));
                    continue;
                }
            };

            let action = PackageAction::inverse_of(installed);
            let status = match action {
                PackageAction::Install => self.install.execute(entry).await,
                PackageAction::Uninstall => self.uninstall.execute(entry).await,
            };
            report.push(ActionOutcome::new(entry.clone(), action, status));
        }

        tracing::info!(
            "Reconciled {} package(s): {} succeeded, {} failed",
            report.outcomes.len(),
            report.succeeded(),
            report.failed()
        );
        report
    }
}

pub struct EnsurePackageManager {
    repository: Arc<dyn PackageRepository>,
    package_manager: String,
    auto_bootstrap: bool,
}

impl EnsurePackageManager {
    pub fn new(
        repository: Arc<dyn PackageRepository>,
        package_manager: impl Into<String>,
        auto_bootstrap: bool,
    ) -> Self {
        Self {
            repository,
            package_manager: package_manager.into(),
            auto_bootstrap,
        }
    }

    /// Installs the package manager if it is missing. Calling it again once
    /// the tool is present does nothing.
    pub async fn execute(&self) -> Result<()> {
        if self.repository.is_available().await? {
            tracing::debug!("{} is available", self.package_manager);
            return Ok(());
        }

        if !self.auto_bootstrap {
            return Err(HostError::PackageManagerUnavailable(self.package_manager.clone()).into());
        }

        tracing::warn!("{} not found, bootstrapping", self.package_manager);
        self.repository.bootstrap().await?;

        if !self.repository.is_available().await? {
            return Err(HostError::BootstrapFailed(format!(
                "{} is still unavailable after installation",
                self.package_manager
            ))
            .into());
        }

        tracing::info!("{} installed", self.package_manager);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::testing::FakePackageRepository;

    fn entry(name: &str, id: &str) -> CatalogEntry {
        CatalogEntry::new(name, id)
    }

    fn reconciler(repo: &Arc<FakePackageRepository>) -> ReconcileSelection {
        let repository: Arc<dyn PackageRepository> = repo.clone();
        ReconcileSelection::new(
            Arc::new(ProbeInstalledState::new(Arc::clone(&repository))),
            Arc::new(InstallPackage::new(Arc::clone(&repository))),
            Arc::new(UninstallPackage::new(repository)),
        )
    }

    #[tokio::test]
    async fn test_probe_matches_whole_identifier() {
        let repo = Arc::new(FakePackageRepository::with_installed(&["vlc-skins", "GoogleChrome"]));
        let probe = ProbeInstalledState::new(repo.clone());

        assert!(!probe.execute("vlc").await.unwrap());
        assert!(probe.execute("googlechrome").await.unwrap());
    }

    #[tokio::test]
    async fn test_probe_with_empty_inventory_is_not_installed() {
        let repo = Arc::new(FakePackageRepository::with_installed(&[]));
        let probe = ProbeInstalledState::new(repo.clone());
        assert!(!probe.execute("vlc").await.unwrap());
    }

    #[tokio::test]
    async fn test_installed_package_is_uninstalled() {
        let repo = Arc::new(FakePackageRepository::with_installed(&["googlechrome"]));
        let selection: Selection = [entry("Chrome", "googlechrome")].into_iter().collect();

        let report = reconciler(&repo).execute(&selection).await;

        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.outcomes[0].action, PackageAction::Uninstall);
        assert_eq!(report.outcomes[0].status, ActionStatus::Success);
        assert_eq!(
            repo.actions(),
            vec![(PackageAction::Uninstall, "googlechrome".to_string(), true)]
        );
        assert!(repo.installed().is_empty());
    }

    #[tokio::test]
    async fn test_absent_package_is_installed() {
        let repo = Arc::new(FakePackageRepository::with_installed(&[]));
        let selection: Selection = [entry("VLC", "vlc")].into_iter().collect();

        let report = reconciler(&repo).execute(&selection).await;

        assert_eq!(report.outcomes[0].action, PackageAction::Install);
        assert!(report.outcomes[0].status.is_success());
        assert_eq!(repo.installed(), vec!["vlc".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_selection_runs_nothing() {
        let repo = Arc::new(FakePackageRepository::with_installed(&["vlc"]));
        let report = reconciler(&repo).execute(&Selection::new()).await;

        assert!(report.outcomes.is_empty());
        assert_eq!(repo.list_calls(), 0);
        assert!(repo.actions().is_empty());
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_batch() {
        let repo = Arc::new(FakePackageRepository::with_installed(&["zoom"]));
        repo.fail_with("googlechrome", 1603);
        let selection: Selection = [
            entry("Chrome", "googlechrome"),
            entry("VLC", "vlc"),
            entry("Zoom", "zoom"),
        ]
        .into_iter()
        .collect();

        let report = reconciler(&repo).execute(&selection).await;

        let summary: Vec<_> = report
            .outcomes
            .iter()
            .map(|o| (o.package_id().to_string(), o.action, o.status.is_success()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("googlechrome".to_string(), PackageAction::Install, false),
                ("vlc".to_string(), PackageAction::Install, true),
                ("zoom".to_string(), PackageAction::Uninstall, true),
            ]
        );
        assert_eq!(
            report.outcomes[0].status,
            ActionStatus::Failure(FailureReason::ExitCode(1603))
        );
        assert_eq!(report.failed(), 1);
    }

    #[tokio::test]
    async fn test_one_action_per_item() {
        let repo = Arc::new(FakePackageRepository::with_installed(&["vlc"]));
        let selection: Selection = [entry("VLC", "vlc"), entry("Chrome", "googlechrome")]
            .into_iter()
            .collect();

        reconciler(&repo).execute(&selection).await;

        let actions = repo.actions();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].0, PackageAction::Uninstall);
        assert_eq!(actions[1].0, PackageAction::Install);
    }

    #[tokio::test]
    async fn test_duplicate_entries_are_reprobed() {
        let repo = Arc::new(FakePackageRepository::with_installed(&[]));
        let selection: Selection = [entry("VLC", "vlc"), entry("VLC", "vlc")].into_iter().collect();

        let report = reconciler(&repo).execute(&selection).await;

        assert_eq!(report.outcomes[0].action, PackageAction::Install);
        assert_eq!(report.outcomes[1].action, PackageAction::Uninstall);
        assert_eq!(repo.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_launch_error_is_recorded_as_failure() {
        let repo = Arc::new(FakePackageRepository::with_installed(&[]));
        repo.fail_to_launch();
        let selection: Selection = [entry("VLC", "vlc"), entry("Zoom", "zoom")]
            .into_iter()
            .collect();

        let report = reconciler(&repo).execute(&selection).await;

        assert_eq!(report.outcomes.len(), 2);
        assert!(matches!(
            report.outcomes[0].status,
            ActionStatus::Failure(FailureReason::Launch(_))
        ));
    }

    #[tokio::test]
    async fn test_probe_error_skips_action() {
        let repo = Arc::new(FakePackageRepository::with_installed(&[]));
        repo.fail_listing();
        let selection: Selection = [entry("VLC", "vlc")].into_iter().collect();

        let report = reconciler(&repo).execute(&selection).await;

        assert!(matches!(
            report.outcomes[0].status,
            ActionStatus::Failure(FailureReason::ProbeFailed(_))
        ));
        assert!(repo.actions().is_empty());
    }

    #[tokio::test]
    async fn test_ensure_skips_bootstrap_when_present() {
        let repo = Arc::new(FakePackageRepository::with_installed(&[]));
        let ensure = EnsurePackageManager::new(repo.clone(), "choco", true);

        ensure.execute().await.unwrap();
        ensure.execute().await.unwrap();

        assert_eq!(repo.bootstrap_calls(), 0);
    }

    #[tokio::test]
    async fn test_ensure_bootstraps_missing_manager_once() {
        let repo = Arc::new(FakePackageRepository::with_installed(&[]));
        repo.set_available(false);
        let ensure = EnsurePackageManager::new(repo.clone(), "choco", true);

        ensure.execute().await.unwrap();
        ensure.execute().await.unwrap();

        assert_eq!(repo.bootstrap_calls(), 1);
    }

    #[tokio::test]
    async fn test_ensure_without_bootstrap_reports_missing_manager() {
        let repo = Arc::new(FakePackageRepository::with_installed(&[]));
        repo.set_available(false);
        let ensure = EnsurePackageManager::new(repo.clone(), "choco", false);

        let err = ensure.execute().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HostError>(),
            Some(HostError::PackageManagerUnavailable(_))
        ));
        assert_eq!(repo.bootstrap_calls(), 0);
    }

    #[tokio::test]
    async fn test_ensure_propagates_bootstrap_failure() {
        let repo = Arc::new(FakePackageRepository::with_installed(&[]));
        repo.set_available(false);
        repo.fail_bootstrap();
        let ensure = EnsurePackageManager::new(repo.clone(), "choco", true);

        assert!(ensure.execute().await.is_err());
    }
}
