//! Configuration types for the application.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    adapters::{DEFAULT_CONCISE_FILE, DEFAULT_VERBOSE_FILE},
    error::Error,
};

/// Where the avoidance set lives and how the agent's randomness is seeded.
///
/// Every field has a default, so a JSON file only needs the fields it wants to
/// change.
///
/// # Examples
///
/// ```
/// use recall::app::RecallConfig;
///
/// let config = RecallConfig::default()
///     .with_concise_path("memory/keys.log")
///     .with_verbose_path("memory/keys-readable.log")
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    /// File holding one key per line; the only file read at startup
    pub concise_path: PathBuf,
    /// Write-only `(row,column)` rendering of the same keys
    pub verbose_path: PathBuf,
    /// Seed for the opening move and console phrases (None = non-deterministic)
    pub seed: Option<u64>,
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            concise_path: PathBuf::from(DEFAULT_CONCISE_FILE),
            verbose_path: PathBuf::from(DEFAULT_VERBOSE_FILE),
            seed: None,
        }
    }
}

impl RecallConfig {
    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read and a serialization
    /// error if it is not valid JSON for this type.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {path:?}"),
            source,
        })?;
        let config: RecallConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_concise_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.concise_path = path.into();
        self
    }

    pub fn with_verbose_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.verbose_path = path.into();
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that both paths are set and distinct.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.concise_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "concise storage path is empty".to_string(),
            });
        }
        if self.verbose_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "verbose storage path is empty".to_string(),
            });
        }
        if self.concise_path == self.verbose_path {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "concise and verbose storage must be different files, both are {:?}",
                    self.concise_path
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecallConfig::default();
        assert_eq!(config.concise_path, PathBuf::from("tttConcise.log"));
        assert_eq!(config.verbose_path, PathBuf::from("tttVerbose.log"));
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("recall.json");
        fs::write(&path, r#"{ "seed": 7 }"#).unwrap();

        let config = RecallConfig::from_json_file(&path).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.concise_path, PathBuf::from("tttConcise.log"));
    }

    #[test]
    fn test_bad_json_is_a_serialization_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("recall.json");
        fs::write(&path, "{ seed: ").unwrap();

        assert!(matches!(
            RecallConfig::from_json_file(&path),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = RecallConfig::from_json_file(Path::new("/nonexistent_12345/recall.json"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_same_path_twice_is_rejected() {
        let config = RecallConfig::default()
            .with_concise_path("keys.log")
            .with_verbose_path("keys.log");
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }
}
