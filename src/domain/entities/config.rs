use super::{Catalog, CatalogEntry};
use crate::domain::error::HostError;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub package_manager: String,
    pub powershell: String,
    pub auto_bootstrap: bool,
    pub delimiter: String,
    pub catalog: Option<Vec<CatalogEntry>>,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), HostError> {
        if self.delimiter.is_empty() {
            return Err(HostError::Config("delimiter must not be empty".to_string()));
        }
        if self.package_manager.trim().is_empty() || self.powershell.trim().is_empty() {
            return Err(HostError::Config("executable names must not be empty".to_string()));
        }
        Ok(())
    }

    /// Builds the catalog for this run, preferring the configured table.
    pub fn catalog(&self) -> Result<Catalog, HostError> {
        match &self.catalog {
            Some(entries) => Catalog::new(entries.clone()),
            None => Ok(Catalog::default()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            package_manager: "choco".to_string(),
            powershell: "powershell".to_string(),
            auto_bootstrap: true,
            delimiter: ",".to_string(),
            catalog: None,
        }
    }
}
