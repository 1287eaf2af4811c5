mod application;
mod cli;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Result;
use application::UseCaseContainer;
use clap::Parser;
use cli::Cli;
use domain::repositories::{HostRepository, PackageRepository};
use domain::services::SelectionParser;
use infrastructure::choco::{ChocoCommand, ChocoPackageRepository};
use infrastructure::powershell::{PowerShellCommand, PowerShellHostRepository};
use presentation::services::{AsyncExecutor, init_logging, render_catalog};
use presentation::style::StyleHint;
use presentation::{Console, MenuShell, TerminalConsole};
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config_repository = cli.config_repository();
    let config = config_repository.load()?;
    tracing::debug!("Loaded config from {}", config_repository.path().display());

    let mut console = TerminalConsole::new();

    if cli.write_config {
        config_repository.save(&config)?;
        console.emit_line(
            &format!("Configuration written to {}", config_repository.path().display()),
            StyleHint::Success,
        );
        return Ok(());
    }

    let catalog = config.catalog()?;
    if cli.list_catalog {
        render_catalog(&mut console, &catalog);
        return Ok(());
    }

    let powershell = PowerShellCommand::new(config.powershell.clone());
    let package_repository: Arc<dyn PackageRepository> = Arc::new(ChocoPackageRepository::new(
        ChocoCommand::new(config.package_manager.clone()),
        powershell.clone(),
    ));
    let host_repository: Arc<dyn HostRepository> =
        Arc::new(PowerShellHostRepository::new(powershell));

    let use_cases = Arc::new(UseCaseContainer::new(
        package_repository,
        host_repository,
        &config,
    ));
    let executor = AsyncExecutor::new()?;
    let parser = SelectionParser::new(config.delimiter.clone());

    tracing::info!("Starting menu with {} catalog entries", catalog.len());
    MenuShell::new(use_cases, catalog, parser, executor).run(&mut console)
}
