use super::CatalogEntry;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageAction {
    Install,
    Uninstall,
}

impl PackageAction {
    /// Action that flips the observed state.
    pub fn inverse_of(installed: bool) -> Self {
        if installed {
            PackageAction::Uninstall
        } else {
            PackageAction::Install
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            PackageAction::Install => "install",
            PackageAction::Uninstall => "uninstall",
        }
    }
}

impl fmt::Display for PackageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageAction::Install => write!(f, "Install"),
            PackageAction::Uninstall => write!(f, "Uninstall"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    ExitCode(i32),
    Launch(String),
    ProbeFailed(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::ExitCode(code) => write!(f, "exit code {}", code),
            FailureReason::Launch(msg) => write!(f, "could not start package manager: {}", msg),
            FailureReason::ProbeFailed(msg) => write!(f, "could not read installed state: {}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionStatus {
    Success,
    Failure(FailureReason),
}

impl ActionStatus {
    pub fn from_exit_code(code: i32) -> Self {
        if code == 0 {
            ActionStatus::Success
        } else {
            ActionStatus::Failure(FailureReason::ExitCode(code))
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ActionStatus::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub entry: CatalogEntry,
    pub action: PackageAction,
    pub status: ActionStatus,
}

impl ActionOutcome {
    pub fn new(entry: CatalogEntry, action: PackageAction, status: ActionStatus) -> Self {
        Self {
            entry,
            action,
            status,
        }
    }

    pub fn package_id(&self) -> &str {
        &self.entry.package_id
    }
}

#[derive(Debug, Clone)]
pub struct ReconcileReport {
    pub started_at: DateTime<Utc>,
    pub outcomes: Vec<ActionOutcome>,
}

impl ReconcileReport {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: ActionOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

impl Default for ReconcileReport {
    fn default() -> Self {
        Self::new()
    }
}
