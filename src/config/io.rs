//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.timecoach/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timecoach")
    }

    /// Get the global config file path (~/.timecoach/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the global config is used
    /// when present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            return Self::from_file(&global_path);
        }

        tracing::debug!(
            "No config at {}, using defaults",
            global_path.display()
        );
        Ok(Self::default())
    }

    /// Write the config next to `path` and rename it into place.
    ///
    /// The temp file is held under an exclusive lock while it is written, so
    /// two concurrent `init` runs cannot interleave their output.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&temp_path)
            .with_context(|| format!("Failed to open {}", temp_path.display()))?;
        temp_file
            .lock_exclusive()
            .context("Failed to lock config temp file")?;

        temp_file.set_len(0)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.sync_all()?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to move config into {}", path.display()))
    }
}
