use crate::domain::{entities::AppConfig, error::HostError};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigRepository {
    config_path: PathBuf,
}

impl ConfigRepository {
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .map(|dir| dir.join("winhost"))
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            config_path: config_dir.join("config.json"),
        }
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            tracing::debug!("No config at {}, using defaults", self.config_path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).context("Failed to read config file")?;

        let config: AppConfig = serde_json::from_str(&content).map_err(|e| {
            HostError::Config(format!("{}: {}", self.config_path.display(), e))
        })?;
        config.validate()?;

        Ok(config)
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        config.validate()?;
        let path = &self.config_path;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

impl Default for ConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CatalogEntry;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let repo = ConfigRepository::with_path(dir.path().join("config.json"));
        assert_eq!(repo.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let repo = ConfigRepository::with_path(dir.path().join("nested").join("config.json"));
        let config = AppConfig {
            auto_bootstrap: false,
            catalog: Some(vec![CatalogEntry::new("VLC", "vlc")]),
            ..AppConfig::default()
        };

        repo.save(&config).unwrap();
        assert_eq!(repo.load().unwrap(), config);
    }

    #[test]
    fn test_write_error_names_the_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.json");

        let err = ConfigRepository::with_path(&path)
            .save(&AppConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("not-a-dir"));
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let dir = TempDir::new().unwrap();
        let repo = ConfigRepository::with_path(dir.path().join("config.json"));
        let config = AppConfig {
            delimiter: String::new(),
            ..AppConfig::default()
        };

        assert!(repo.save(&config).is_err());
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ConfigRepository::with_path(&path).load().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HostError>(),
            Some(HostError::Config(_))
        ));
    }
}
