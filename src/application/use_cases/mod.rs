pub mod host_operations;
pub mod package_operations;

#[cfg(test)]
pub mod testing;

pub use host_operations::*;
pub use package_operations::*;
