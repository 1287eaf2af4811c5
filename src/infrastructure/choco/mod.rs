pub mod command;
pub mod repository;

pub use command::ChocoCommand;
pub use repository::ChocoPackageRepository;
