use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid computer name '{name}': {reason}")]
    InvalidComputerName { name: String, reason: String },

    #[error("Package manager '{0}' is not installed")]
    PackageManagerUnavailable(String),

    #[error("Package manager bootstrap failed: {0}")]
    BootstrapFailed(String),

    #[error("{program} exited with {code}: {stderr}")]
    CommandFailed {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}
