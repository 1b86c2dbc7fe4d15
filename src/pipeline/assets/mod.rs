pub mod lifecycle;

pub use lifecycle::*;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("source image not found: {0}")]
    MissingSource(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("image path has no usable file name: {0}")]
    InvalidFileName(PathBuf),

    #[error("archived image cannot be promoted: {0}")]
    AlreadyArchived(PathBuf),
}
