//! Errors for the linkpager library
//!
//! Enumeration for all errors that can occur while loading, watching and
//! serving the link file.
//!

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkPagerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not read {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),
}

impl LinkPagerError {
    pub fn source_unreadable(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LinkPagerError::SourceUnreadable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn invalid_config(msg: impl AsRef<str>) -> Self {
        LinkPagerError::InvalidConfig(msg.as_ref().to_string())
    }

    pub fn template_not_found(path: impl AsRef<Path>) -> Self {
        LinkPagerError::TemplateNotFound(path.as_ref().to_path_buf())
    }
}
