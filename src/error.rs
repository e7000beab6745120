use std::path::PathBuf;

/// Construction-time failures. Everything after construction degrades
/// instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("data directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("data path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
