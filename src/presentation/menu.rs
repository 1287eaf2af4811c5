use crate::application::UseCaseContainer;
use crate::domain::entities::Catalog;
use crate::domain::services::SelectionParser;
use crate::presentation::console::Console;
use crate::presentation::services::{AsyncExecutor, SoftwareFlow};
use crate::presentation::style::StyleHint;
use anyhow::Result;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    RenameComputer,
    InstallUpdates,
    ManageSoftware,
    Restart,
    Exit,
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input {
            "1" => MenuChoice::RenameComputer,
            "2" => MenuChoice::InstallUpdates,
            "3" => MenuChoice::ManageSoftware,
            "4" => MenuChoice::Restart,
            _ if input.eq_ignore_ascii_case("exit") => MenuChoice::Exit,
            _ => MenuChoice::Invalid(input.to_string()),
        }
    }
}

const MENU_ITEMS: [&str; 4] = [
    "1) Rename computer",
    "2) Install Windows updates",
    "3) Install or uninstall applications",
    "4) Restart computer",
];

pub struct MenuShell {
    use_cases: Arc<UseCaseContainer>,
    software: SoftwareFlow,
    executor: AsyncExecutor,
}

impl MenuShell {
    pub fn new(
        use_cases: Arc<UseCaseContainer>,
        catalog: Catalog,
        parser: SelectionParser,
        executor: AsyncExecutor,
    ) -> Self {
        let software = SoftwareFlow::new(
            Arc::clone(&use_cases.reconcile),
            Arc::clone(&use_cases.ensure_package_manager),
            catalog,
            parser,
            executor.clone(),
        );

        Self {
            use_cases,
            software,
            executor,
        }
    }

    fn render(&self, console: &mut dyn Console) {
        console.emit_line("", StyleHint::Plain);
        console.emit_line("Windows host administration", StyleHint::Title);
        for item in MENU_ITEMS {
            console.emit_line(item, StyleHint::Plain);
        }
        console.emit_line("Type 'exit' to quit.", StyleHint::Plain);
    }

    /// Loops until `exit` or end of input. A failing option is reported and
    /// the menu is shown again.
    pub fn run(&self, console: &mut dyn Console) -> Result<()> {
        loop {
            self.render(console);
            let Some(input) = console.prompt_line("Select an option:")? else {
                tracing::debug!("Input closed, leaving menu");
                return Ok(());
            };

            let choice = MenuChoice::parse(&input);
            tracing::debug!("Menu choice: {:?}", choice);

            let result = match choice {
                MenuChoice::RenameComputer => self.rename(console),
                MenuChoice::InstallUpdates => self.install_updates(console),
                MenuChoice::ManageSoftware => self.software.run(console).map(|_| ()),
                MenuChoice::Restart => self.restart(console),
                MenuChoice::Exit => {
                    console.emit_line("Goodbye.", StyleHint::Plain);
                    return Ok(());
                }
                MenuChoice::Invalid(input) => {
                    console.emit_line(
                        &format!("'{}' is not a valid option.", input),
                        StyleHint::Warning,
                    );
                    Ok(())
                }
            };

            if let Err(e) = result {
                tracing::error!("Menu action failed: {:#}", e);
                console.emit_line(&format!("{:#}", e), StyleHint::Error);
            }
        }
    }

    fn rename(&self, console: &mut dyn Console) -> Result<()> {
        let Some(name) = console.prompt_line("New computer name:")? else {
            return Ok(());
        };
        if name.trim().is_empty() {
            console.emit_line("Rename cancelled.", StyleHint::Info);
            return Ok(());
        }

        let rename = Arc::clone(&self.use_cases.rename_computer);
        let target = name.clone();
        self.executor
            .execute(async move { rename.execute(&target).await })?;

        console.emit_line(
            &format!(
                "Computer renamed to {}. Restart to apply the new name.",
                name.trim()
            ),
            StyleHint::Success,
        );
        Ok(())
    }

    fn install_updates(&self, console: &mut dyn Console) -> Result<()> {
        console.emit_line(
            "Searching for and installing updates. This can take a while.",
            StyleHint::Info,
        );

        let updates = Arc::clone(&self.use_cases.install_updates);
        self.executor
            .execute(async move { updates.execute().await })?;

        console.emit_line("Updates installed.", StyleHint::Success);
        Ok(())
    }

    fn restart(&self, console: &mut dyn Console) -> Result<()> {
        let answer = console.prompt_line("Restart now? [y/N]:")?;
        let confirmed = answer
            .map(|a| matches!(a.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false);
        if !confirmed {
            console.emit_line("Restart cancelled.", StyleHint::Info);
            return Ok(());
        }

        let restart = Arc::clone(&self.use_cases.restart);
        self.executor
            .execute(async move { restart.execute().await })?;

        console.emit_line("Restarting...", StyleHint::Info);
        Ok(())
    }
}
