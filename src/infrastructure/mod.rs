pub mod choco;
pub mod config_repository;
pub mod powershell;

pub use config_repository::ConfigRepository;
