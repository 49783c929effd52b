//! A single named JSON config file

use serde_json::{Map, Value};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::defaults::{BundledDefaults, DefaultSource};
use super::dir::{file_name, init_config_dir, validate_name, ConfigDir};

/// One JSON config file at `config/<name>.json` and its in-memory document
#[derive(Debug)]
pub struct ConfigStore {
    name: String,
    file_path: PathBuf,
    document: Option<Map<String, Value>>,
}

impl ConfigStore {
    /// Open the config `name` under the process config directory, creating the
    /// file if needed. A newly created file is seeded from the bundled default
    /// when `seed_with_default` is set.
    ///
    /// The directory is only created by the first call in the process.
    pub fn new(name: &str, seed_with_default: bool) -> Result<Self> {
        let dir = init_config_dir()?;
        Self::create(dir, name, seed_with_default, &BundledDefaults)
    }

    /// Open the config `name` under `dir`, seeding from `defaults`
    pub fn open<D>(dir: &ConfigDir, name: &str, seed_with_default: bool, defaults: &D) -> Result<Self>
    where
        D: DefaultSource + ?Sized,
    {
        validate_name(name)?;
        dir.init()?;
        Self::create(dir, name, seed_with_default, defaults)
    }

    /// Open the config `name` under `dir` without creating anything.
    ///
    /// Fails with `ConfigNotFound` when the file does not exist yet.
    pub fn open_existing(dir: &ConfigDir, name: &str) -> Result<Self> {
        let file_path = dir.resolve(name)?;
        if !file_path.is_file() {
            return Err(Error::ConfigNotFound(name.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            file_path,
            document: None,
        })
    }

    fn create<D>(dir: &ConfigDir, name: &str, seed_with_default: bool, defaults: &D) -> Result<Self>
    where
        D: DefaultSource + ?Sized,
    {
        let file_path = dir.resolve(name)?;

        match OpenOptions::new().write(true).create_new(true).open(&file_path) {
            Ok(mut file) => {
                tracing::debug!("Created config file {}", file_path.display());

                if seed_with_default {
                    if let Some(data) = defaults.lookup(&file_name(name)) {
                        file.write_all(&data)?;
                        tracing::debug!("Seeded {} from bundled default ({} bytes)", name, data.len());
                    }
                }
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e.into()),
        }

        Ok(Self {
            name: name.to_string(),
            file_path,
            document: None,
        })
    }

    /// Delete the file for `name` and recreate it from its default
    pub fn reset<D>(dir: &ConfigDir, name: &str, defaults: &D) -> Result<Self>
    where
        D: DefaultSource + ?Sized,
    {
        validate_name(name)?;

        match fs::remove_file(dir.file_for(name)) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        Self::open(dir, name, true, defaults)
    }

    /// Read and parse the file, replacing the current document.
    ///
    /// On failure the previous document is kept.
    pub fn load(&mut self) -> Result<()> {
        let content = fs::read(&self.file_path)?;

        match serde_json::from_slice::<Value>(&content)? {
            Value::Object(map) => {
                tracing::debug!("Loaded config {} ({} keys)", self.name, map.len());
                self.document = Some(map);
                Ok(())
            }
            other => Err(Error::NotAnObject {
                path: self.file_path.clone(),
                found: kind_of(&other),
            }),
        }
    }

    /// Overwrite the file with the current document
    pub fn save(&self) -> Result<()> {
        let document = self
            .document
            .as_ref()
            .ok_or_else(|| Error::NotLoaded(self.name.clone()))?;

        let text = serde_json::to_string(document)?;
        fs::write(&self.file_path, text)?;

        tracing::debug!("Saved config {}", self.name);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// The loaded document, or `None` before the first successful `load()`
    pub fn document(&self) -> Option<&Map<String, Value>> {
        self.document.as_ref()
    }

    /// Mutable access for in-place edits; persist them with `save()`
    pub fn document_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.document.as_mut()
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
