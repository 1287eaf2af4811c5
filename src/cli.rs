use crate::infrastructure::ConfigRepository;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "winhost",
    version,
    about = "Interactive administration menu for a Windows host"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the application catalog and exit
    #[arg(long)]
    pub list_catalog: bool,

    /// Write the effective configuration to the config path and exit
    #[arg(long, conflicts_with = "list_catalog")]
    pub write_config: bool,
}

impl Cli {
    pub fn config_repository(&self) -> ConfigRepository {
        match &self.config {
            Some(path) => ConfigRepository::with_path(path),
            None => ConfigRepository::new(),
        }
    }
}
