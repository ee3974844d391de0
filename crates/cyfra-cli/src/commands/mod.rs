//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod fields;
pub mod process;

use std::path::{Path, PathBuf};

use cyfra_core::CyfraConfig;
use tracing::debug;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cyfra")
        .join("config.json")
}

/// Configuration file in effect: the `-c` override, else the default path.
pub fn config_path(config_path: Option<&str>) -> PathBuf {
    config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

/// Load configuration. An explicit path must exist; the default path falls
/// back to built-in defaults when no file has been created yet.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CyfraConfig> {
    if let Some(path) = config_path {
        return read_config(Path::new(path));
    }

    let path = default_config_path();
    if path.exists() {
        read_config(&path)
    } else {
        debug!("No config file at {}, using defaults", path.display());
        Ok(CyfraConfig::default())
    }
}

fn read_config(path: &Path) -> anyhow::Result<CyfraConfig> {
    CyfraConfig::from_file(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))
}
