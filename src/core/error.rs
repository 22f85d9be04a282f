//! Fatal scan errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot resolve path {path}: {source}")]
    InvalidRoot {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Traversal error: {0}")]
    Traversal(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
