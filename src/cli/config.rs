//! Storage options shared by CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::RecallConfig;

/// Where the avoidance set is stored and how play is seeded
#[derive(Args, Debug, Clone, Default)]
pub struct StorageArgs {
    /// JSON config file; flags given on the command line take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Concise storage file (one key per line) [default: tttConcise.log]
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Verbose storage file ((row,column) pairs) [default: tttVerbose.log]
    #[arg(long = "verbose-log")]
    pub verbose_log: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl StorageArgs {
    /// Merge the config file (if any) with the command-line overrides.
    pub fn resolve(&self) -> Result<RecallConfig> {
        let mut config = match &self.config {
            Some(path) => RecallConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => RecallConfig::default(),
        };

        if let Some(path) = &self.store {
            config = config.with_concise_path(path);
        }
        if let Some(path) = &self.verbose_log {
            config = config.with_verbose_path(path);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config.validate().context("Invalid storage configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let config = StorageArgs::default().resolve().unwrap();
        assert_eq!(config, RecallConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("recall.json");
        fs::write(
            &path,
            r#"{ "concise_path": "a.log", "verbose_path": "b.log", "seed": 1 }"#,
        )
        .unwrap();

        let args = StorageArgs {
            config: Some(path),
            store: Some(PathBuf::from("c.log")),
            verbose_log: None,
            seed: Some(2),
        };
        let config = args.resolve().unwrap();

        assert_eq!(config.concise_path, PathBuf::from("c.log"));
        assert_eq!(config.verbose_path, PathBuf::from("b.log"));
        assert_eq!(config.seed, Some(2));
    }

    #[test]
    fn test_clashing_paths_are_rejected() {
        let args = StorageArgs {
            store: Some(PathBuf::from("same.log")),
            verbose_log: Some(PathBuf::from("same.log")),
            ..StorageArgs::default()
        };
        assert!(args.resolve().is_err());
    }
}
