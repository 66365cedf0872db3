// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{FormatError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Host-side settings only; the formatting rules themselves are fixed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub store: StoreConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    pub root: PathBuf,
    pub activate: bool,
    pub pretty_metadata: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    pub frontmatter_tags: bool,
    /// 0 disables the limit.
    pub max_file_size_kb: usize,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| FormatError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        let path = path.unwrap_or_else(|| Path::new("config/default.toml"));
        builder = builder.add_source(config::File::from(path).required(false));

        builder = builder.add_source(
            config::Environment::with_prefix("DRAFT_TIDY")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| FormatError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| FormatError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            store: StoreConfig {
                root: PathBuf::from("./drafts"),
                activate: true,
                pretty_metadata: true,
            },
            input: InputConfig {
                frontmatter_tags: true,
                max_file_size_kb: 1024,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.store.root.as_os_str().is_empty() {
            return Err(FormatError::Config(
                "store.root must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(Some(temp.path().join("missing.toml").as_path())).unwrap();

        assert!(config.store.activate);
        assert_eq!(config.input.max_file_size_kb, 1024);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(
            &path,
            "[store]\nroot = \"/tmp/elsewhere\"\nactivate = false\n\n[input]\nmax_file_size_kb = 0\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();

        assert_eq!(config.store.root, PathBuf::from("/tmp/elsewhere"));
        assert!(!config.store.activate);
        assert!(config.store.pretty_metadata);
        assert!(config.input.frontmatter_tags);
        assert_eq!(config.input.max_file_size_kb, 0);
    }

    #[test]
    fn test_empty_root_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "[store]\nroot = \"\"\n").unwrap();

        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(FormatError::Config(_))
        ));
    }
}
