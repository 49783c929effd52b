//! Config directory resolution and initialization

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Name of the directory holding every config file, relative to the base
pub const CONFIG_FOLDER: &str = "config";

const CONFIG_EXTENSION: &str = "json";

static PROCESS_CONFIG_DIR: OnceLock<ConfigDir> = OnceLock::new();

/// The `config/` directory under a base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDir {
    path: PathBuf,
}

impl ConfigDir {
    /// Config directory under the current working directory, captured now
    pub fn current() -> Result<Self> {
        Ok(Self::at(env::current_dir()?))
    }

    /// Config directory under an explicit base directory
    pub fn at(base: impl AsRef<Path>) -> Self {
        Self {
            path: base.as_ref().join(CONFIG_FOLDER),
        }
    }

    /// Create the directory and any missing parents
    pub fn init(&self) -> Result<()> {
        if !self.path.is_dir() {
            fs::create_dir_all(&self.path)?;
            tracing::debug!("Created config directory {}", self.path.display());
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the file backing the config called `name`
    pub fn file_for(&self, name: &str) -> PathBuf {
        self.path.join(file_name(name))
    }

    /// Like `file_for`, but rejects names that would leave the directory
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.file_for(name))
    }

    /// Names of all config files in the directory, sorted
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.path)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(CONFIG_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

/// File name (and bundled default key) for a config name
pub fn file_name(name: &str) -> String {
    format!("{}.{}", name, CONFIG_EXTENSION)
}

/// Reject names that would escape the config directory
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name.contains("..")
        || name.contains(['/', '\\', '\0']);

    if invalid {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Initialize the config directory under the working directory once per process.
///
/// Later calls return the directory resolved by the first successful call, even
/// if the working directory has changed since.
pub fn init_config_dir() -> Result<&'static ConfigDir> {
    if let Some(dir) = PROCESS_CONFIG_DIR.get() {
        return Ok(dir);
    }

    let dir = ConfigDir::current()?;
    dir.init()?;
    Ok(PROCESS_CONFIG_DIR.get_or_init(|| dir))
}
