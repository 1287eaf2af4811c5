//! In-memory repositories for exercising use cases without a real host.

use crate::domain::{
    entities::PackageAction,
    repositories::{HostRepository, PackageRepository},
};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct FakeState {
    installed: Vec<String>,
    unavailable: bool,
    exit_codes: HashMap<String, i32>,
    launch_error: bool,
    listing_error: bool,
    bootstrap_error: bool,
    actions: Vec<(PackageAction, String, bool)>,
    list_calls: usize,
    bootstrap_calls: usize,
}

/// Package manager double that tracks an installed set and records every call.
#[derive(Default)]
pub struct FakePackageRepository {
    state: Mutex<FakeState>,
}

impl FakePackageRepository {
    pub fn with_installed(ids: &[&str]) -> Self {
        let repo = Self::default();
        repo.state.lock().unwrap().installed = ids.iter().map(|s| s.to_string()).collect();
        repo
    }

    pub fn fail_with(&self, package_id: &str, code: i32) {
        self.state
            .lock()
            .unwrap()
            .exit_codes
            .insert(package_id.to_string(), code);
    }

    pub fn fail_to_launch(&self) {
        self.state.lock().unwrap().launch_error = true;
    }

    pub fn fail_listing(&self) {
        self.state.lock().unwrap().listing_error = true;
    }

    pub fn fail_bootstrap(&self) {
        self.state.lock().unwrap().bootstrap_error = true;
    }

    pub fn set_available(&self, available: bool) {
        self.state.lock().unwrap().unavailable = !available;
    }

    pub fn installed(&self) -> Vec<String> {
        self.state.lock().unwrap().installed.clone()
    }

    pub fn actions(&self) -> Vec<(PackageAction, String, bool)> {
        self.state.lock().unwrap().actions.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }

    pub fn bootstrap_calls(&self) -> usize {
        self.state.lock().unwrap().bootstrap_calls
    }
}

#[async_trait]
impl PackageRepository for FakePackageRepository {
    async fn list_installed_packages(&self) -> Result<Vec<String>> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;
        if state.listing_error {
            return Err(anyhow!("choco list exited with 1"));
        }
        Ok(state.installed.clone())
    }

    async fn run_action(
        &self,
        action: PackageAction,
        package_id: &str,
        auto_confirm: bool,
    ) -> Result<i32> {
        let mut state = self.state.lock().unwrap();
        state
            .actions
            .push((action, package_id.to_string(), auto_confirm));

        if state.launch_error {
            return Err(anyhow!("program not found"));
        }
        if let Some(code) = state.exit_codes.get(package_id) {
            return Ok(*code);
        }

        match action {
            PackageAction::Install => state.installed.push(package_id.to_string()),
            PackageAction::Uninstall => state.installed.retain(|id| id != package_id),
        }
        Ok(0)
    }

    async fn is_available(&self) -> Result<bool> {
        Ok(!self.state.lock().unwrap().unavailable)
    }

    async fn bootstrap(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.bootstrap_calls += 1;
        if state.bootstrap_error {
            return Err(anyhow!("install script failed"));
        }
        state.unavailable = false;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Rename(String),
    Updates,
    Restart,
}

#[derive(Default)]
pub struct FakeHostRepository {
    calls: Mutex<Vec<HostCall>>,
    fail: Mutex<bool>,
}

impl FakeHostRepository {
    pub fn failing() -> Self {
        let repo = Self::default();
        *repo.fail.lock().unwrap() = true;
        repo
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: HostCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if *self.fail.lock().unwrap() {
            return Err(anyhow!("powershell exited with 1"));
        }
        Ok(())
    }
}

#[async_trait]
impl HostRepository for FakeHostRepository {
    async fn rename_computer(&self, new_name: &str) -> Result<()> {
        self.record(HostCall::Rename(new_name.to_string()))
    }

    async fn install_updates(&self) -> Result<()> {
        self.record(HostCall::Updates)
    }

    async fn restart(&self) -> Result<()> {
        self.record(HostCall::Restart)
    }
}
