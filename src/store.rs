//! Single-snapshot configuration persistence
//!
//! Exactly one [`GenerationConfig`] is persisted as pretty-printed JSON,
//! overwritten wholesale on save and read back wholesale on load. Absent
//! keys take their defaults on load (pattern `cqrs`, method `GET`, flags
//! `false`) via the serde layout in [`crate::config`]. Last write wins; no
//! locking is attempted.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::GenerationConfig;

const APP_DIR: &str = "crudgen";
const SNAPSHOT_FILE: &str = "generator_config.json";

/// Errors produced by the snapshot store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `load` was called before any snapshot was saved.
    #[error("no saved configuration found")]
    NotFound,
    /// The platform reports no user configuration directory.
    #[error("could not determine the user configuration directory")]
    NoConfigDir,
    /// The snapshot file exists but is not a valid configuration document.
    #[error("saved configuration is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Persists the single configuration snapshot.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at the default location,
    /// `<user config dir>/crudgen/generator_config.json`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoConfigDir`] when the platform has no user
    /// configuration directory.
    pub fn open_default() -> Result<Self, StoreError> {
        let base = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self::at(base.join(APP_DIR).join(SNAPSHOT_FILE)))
    }

    /// Store at an explicit path.
    #[must_use]
    pub const fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Snapshot file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a snapshot has been saved.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Overwrite the snapshot wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, config: &GenerationConfig) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let document = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, document)?;
        Ok(())
    }

    /// Read the snapshot back wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no snapshot exists and
    /// [`StoreError::Malformed`] when the file is not a valid document.
    pub fn load(&self) -> Result<GenerationConfig, StoreError> {
        if !self.exists() {
            return Err(StoreError::NotFound);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Delete the snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), StoreError> {
        if self.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::config::{HttpMethod, Pattern, PropertyDescriptor};

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::at(dir.path().join("generator_config.json"))
    }

    #[test]
    fn save_then_load_round_trips_the_configuration() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let config = GenerationConfig {
            pattern: Pattern::Service,
            http_method: HttpMethod::Put,
            entity_name: "Invoice".to_string(),
            dto_fields: vec![
                PropertyDescriptor::new("int", "Id"),
                PropertyDescriptor::new("decimal", "Total"),
            ],
            namespace: "Billing".to_string(),
            use_authorization: true,
            use_validation: true,
            ..GenerationConfig::default()
        };

        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn load_before_save_reports_no_saved_configuration() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(matches!(store.load(), Err(StoreError::NotFound)));
    }

    #[test]
    fn absent_keys_load_as_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"entityName": "Order"}"#).unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.pattern, Pattern::Cqrs);
        assert_eq!(config.http_method, HttpMethod::Get);
        assert_eq!(config.entity_name, "Order");
        assert!(!config.use_authorization);
        assert!(!config.use_validation);
        assert!(config.dto_fields.is_empty());
    }

    #[test]
    fn save_overwrites_the_previous_snapshot_wholesale() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut config = GenerationConfig {
            entity_name: "First".to_string(),
            use_validation: true,
            ..GenerationConfig::default()
        };
        store.save(&config).unwrap();

        config.entity_name = "Second".to_string();
        config.use_validation = false;
        store.save(&config).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.entity_name, "Second");
        assert!(!loaded.use_validation);
    }

    #[test]
    fn malformed_snapshot_is_a_distinct_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Malformed(_))));
    }

    #[test]
    fn clear_removes_the_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&GenerationConfig::default()).unwrap();
        assert!(store.exists());
        store.clear().unwrap();
        assert!(!store.exists());
        // Clearing twice is fine.
        store.clear().unwrap();
    }
}
