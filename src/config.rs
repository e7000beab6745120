use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable that overrides the bundled data directory.
pub const DATA_DIR_ENV: &str = "MMNAMES_DATA_DIR";

/// Sample dictionary shipped with the crate.
pub const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Explicit path, then `MMNAMES_DATA_DIR`, then the bundled `data/`.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_DATA_DIR),
    }
}

pub fn validate_data_dir(path: PathBuf) -> Result<PathBuf, ConfigError> {
    match fs::metadata(&path) {
        Ok(meta) if meta.is_dir() => Ok(path),
        Ok(_) => Err(ConfigError::NotADirectory(path)),
        Err(_) => Err(ConfigError::NotFound(path)),
    }
}
