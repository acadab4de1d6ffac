//! Unified error type for repokit.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepokitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("git error: {0}")]
    Git(String),

    #[error("not a git repository: {}", .0.display())]
    NotARepo(PathBuf),

    #[error("hooks source directory not found: {}", .0.display())]
    MissingSourceDir(PathBuf),

    #[error("git hooks directory not found: {}", .0.display())]
    MissingHooksDir(PathBuf),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, RepokitError>;
