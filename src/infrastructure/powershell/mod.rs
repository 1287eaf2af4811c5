pub mod command;
pub mod host_repository;

pub use command::PowerShellCommand;
pub use host_repository::PowerShellHostRepository;
