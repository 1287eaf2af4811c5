pub mod host_repository;
pub mod package_repository;

pub use host_repository::HostRepository;
pub use package_repository::PackageRepository;
