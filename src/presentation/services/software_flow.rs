use crate::application::use_cases::{EnsurePackageManager, ReconcileSelection};
use crate::domain::entities::{
    ActionOutcome, ActionStatus, Catalog, PackageAction, ReconcileReport,
};
use crate::domain::services::SelectionParser;
use crate::presentation::console::Console;
use crate::presentation::services::AsyncExecutor;
use crate::presentation::style::StyleHint;
use anyhow::Result;
use std::sync::Arc;

pub fn render_catalog(console: &mut dyn Console, catalog: &Catalog) {
    console.emit_line("Available applications", StyleHint::Title);
    for (i, entry) in catalog.entries().iter().enumerate() {
        console.emit_line(
            &format!("{:>3}) {}", i + 1, entry.display_name),
            StyleHint::Plain,
        );
    }
}

fn outcome_line(outcome: &ActionOutcome) -> (String, StyleHint) {
    let name = format!("{} ({})", outcome.entry.display_name, outcome.package_id());
    match (&outcome.status, outcome.action) {
        (ActionStatus::Success, PackageAction::Install) => {
            (format!("{} installed", name), StyleHint::Success)
        }
        (ActionStatus::Success, PackageAction::Uninstall) => {
            (format!("{} uninstalled", name), StyleHint::Success)
        }
        (ActionStatus::Failure(reason), action) => (
            format!("Failed to {} {}: {}", action.verb(), name, reason),
            StyleHint::Error,
        ),
    }
}

/// Menu turn for option 3: pick applications, flip their installed state,
/// report every item.
pub struct SoftwareFlow {
    reconcile: Arc<ReconcileSelection>,
    ensure_package_manager: Arc<EnsurePackageManager>,
    catalog: Catalog,
    parser: SelectionParser,
    executor: AsyncExecutor,
}

impl SoftwareFlow {
    pub fn new(
        reconcile: Arc<ReconcileSelection>,
        ensure_package_manager: Arc<EnsurePackageManager>,
        catalog: Catalog,
        parser: SelectionParser,
        executor: AsyncExecutor,
    ) -> Self {
        Self {
            reconcile,
            ensure_package_manager,
            catalog,
            parser,
            executor,
        }
    }

    /// Errors only when the package manager cannot be made available; item
    /// failures are reported inline and never surface here.
    pub fn run(&self, console: &mut dyn Console) -> Result<Option<ReconcileReport>> {
        if self.catalog.is_empty() {
            console.emit_line("No applications are configured.", StyleHint::Warning);
            return Ok(None);
        }

        render_catalog(console, &self.catalog);
        console.emit_line(
            "Selected applications that are installed will be uninstalled, the rest installed.",
            StyleHint::Info,
        );

        let Some(input) = console.prompt_line("Enter application numbers separated by commas:")?
        else {
            return Ok(None);
        };

        let parsed = self.parser.parse(&input, &self.catalog);
        for invalid in &parsed.invalid {
            tracing::warn!("Ignoring selection token '{}'", invalid.token);
            console.emit_line(&format!("Skipping: {}", invalid), StyleHint::Warning);
        }

        if parsed.selection.is_empty() {
            console.emit_line("No applications selected.", StyleHint::Info);
            return Ok(None);
        }

        let ensure = Arc::clone(&self.ensure_package_manager);
        self.executor.execute(async move { ensure.execute().await })?;

        let reconcile = Arc::clone(&self.reconcile);
        let selection = parsed.selection;
        let report = self
            .executor
            .execute(async move { reconcile.execute(&selection).await });

        for outcome in &report.outcomes {
            let (line, style) = outcome_line(outcome);
            console.emit_line(&line, style);
        }

        let summary = format!(
            "{} succeeded, {} failed (started {})",
            report.succeeded(),
            report.failed(),
            report.started_at.with_timezone(&chrono::Local).format("%H:%M:%S")
        );
        let style = if report.failed() == 0 {
            StyleHint::Success
        } else {
            StyleHint::Warning
        };
        console.emit_line(&summary, style);

        Ok(Some(report))
    }
}
