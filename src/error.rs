//! Error types for cfgstore

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Config file {} must contain a JSON object at the top level, found {found}", .path.display())]
    NotAnObject { path: PathBuf, found: &'static str },

    #[error("Config '{0}' has no document loaded")]
    NotLoaded(String),

    #[error("Invalid config name: {0:?}")]
    InvalidName(String),

    #[error("Config '{0}' does not exist. Run 'cfgstore create {0}' first.")]
    ConfigNotFound(String),

    #[error("Key '{key}' not found in config '{name}'")]
    KeyNotFound { name: String, key: String },
}

impl Error {
    /// Directory or file creation, open, read or write failure
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Content is not valid JSON or not a JSON object
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_) | Error::NotAnObject { .. })
    }

    /// Operation needs a loaded document
    pub fn is_state(&self) -> bool {
        matches!(self, Error::NotLoaded(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
