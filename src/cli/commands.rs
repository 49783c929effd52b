//! CLI command implementations

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

use crate::cli::{info, print_config_table, success, warn, ConfigFileRow, OutputFormat};
use crate::config::{init_config_dir, BundledDefaults, ConfigDir, ConfigStore};
use crate::error::Error;

/// Resolve the config directory from the `--base-dir` option
pub fn resolve_dir(base_dir: Option<PathBuf>) -> Result<ConfigDir> {
    match base_dir {
        Some(base) => Ok(ConfigDir::at(base)),
        None => Ok(init_config_dir()?.clone()),
    }
}

/// Create the config directory
pub fn init(dir: &ConfigDir) -> Result<()> {
    dir.init()?;
    success(&format!("Config directory ready: {}", dir.path().display()));
    Ok(())
}

/// Create a config file
pub fn create(dir: &ConfigDir, name: &str, no_default: bool) -> Result<()> {
    let existed = dir.file_for(name).exists();
    let store = ConfigStore::open(dir, name, !no_default, &BundledDefaults)?;

    if existed {
        warn(&format!("{} already exists", store.file_path().display()));
    } else if !no_default && BundledDefaults::contains(name) {
        success(&format!(
            "Created {} from bundled default",
            store.file_path().display()
        ));
    } else {
        success(&format!("Created empty {}", store.file_path().display()));
    }

    Ok(())
}

/// Print a config document
pub fn show(dir: &ConfigDir, name: &str, format: OutputFormat) -> Result<()> {
    let store = load_store(dir, name)?;
    println!("{}", render(loaded(&store)?, format)?);
    Ok(())
}

/// Print a single value
pub fn get(dir: &ConfigDir, name: &str, key: &str) -> Result<()> {
    let store = load_store(dir, name)?;
    let value = lookup(loaded(&store)?, key).ok_or_else(|| Error::KeyNotFound {
        name: name.to_string(),
        key: key.to_string(),
    })?;

    match value {
        Value::String(s) => println!("{}", s),
        other => println!("{}", serde_json::to_string_pretty(other)?),
    }
    Ok(())
}

/// Set a top-level key and save
pub fn set(dir: &ConfigDir, name: &str, key: &str, raw: &str) -> Result<()> {
    let mut store = load_store(dir, name)?;
    let value = parse_value(raw);

    if let Some(document) = store.document_mut() {
        document.insert(key.to_string(), value);
    }
    store.save()?;

    success(&format!("Set {}.{}", name, key));
    Ok(())
}

/// Remove a top-level key and save
pub fn unset(dir: &ConfigDir, name: &str, key: &str) -> Result<()> {
    let mut store = load_store(dir, name)?;

    let removed = store
        .document_mut()
        .and_then(|document| document.shift_remove(key))
        .is_some();

    if !removed {
        warn(&format!("Key '{}' not present in {}", key, name));
        return Ok(());
    }

    store.save()?;
    success(&format!("Removed {}.{}", name, key));
    Ok(())
}

/// List config files in the directory
pub fn list(dir: &ConfigDir) -> Result<()> {
    if !dir.path().is_dir() {
        info("Config directory does not exist yet. Run 'cfgstore init' first.");
        return Ok(());
    }

    let mut rows = Vec::new();
    for name in dir.list()? {
        let size = fs::metadata(dir.file_for(&name))?.len();
        rows.push(ConfigFileRow {
            has_default: BundledDefaults::contains(&name),
            name,
            size,
        });
    }

    print_config_table(&rows);
    Ok(())
}

/// List bundled defaults
pub fn defaults() -> Result<()> {
    let names = BundledDefaults::names();
    if names.is_empty() {
        info("No bundled defaults");
        return Ok(());
    }

    for name in names {
        println!("{}", name);
    }
    Ok(())
}

/// Recreate a config file from its bundled default
pub fn reset(dir: &ConfigDir, name: &str, force: bool) -> Result<()> {
    if !force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Reset {} and discard its contents?",
                dir.file_for(name).display()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            info("Reset cancelled");
            return Ok(());
        }
    }

    let store = ConfigStore::reset(dir, name, &BundledDefaults)?;
    if !BundledDefaults::contains(name) {
        warn(&format!("No bundled default for '{}', file left empty", name));
    }

    success(&format!("Reset {}", store.file_path().display()));
    Ok(())
}

/// Print the path of a config file
pub fn path(dir: &ConfigDir, name: &str) -> Result<()> {
    println!("{}", dir.resolve(name)?.display());
    Ok(())
}

/// Open an existing file and load it; never creates one
fn load_store(dir: &ConfigDir, name: &str) -> Result<ConfigStore> {
    let mut store = ConfigStore::open_existing(dir, name)?;
    store.load()?;
    Ok(store)
}

fn loaded(store: &ConfigStore) -> crate::error::Result<&Map<String, Value>> {
    store
        .document()
        .ok_or_else(|| Error::NotLoaded(store.name().to_string()))
}

/// Render a document in the requested format
pub fn render(document: &Map<String, Value>, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string(document)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(document)?,
        OutputFormat::Yaml => serde_yaml::to_string(document)?,
    };
    Ok(text)
}

/// Find a value by top-level key, or by JSON pointer when the key starts with '/'
pub fn lookup<'a>(document: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    if key.starts_with('/') {
        let (first, rest) = match key[1..].split_once('/') {
            Some((first, rest)) => (first, format!("/{}", rest)),
            None => (&key[1..], String::new()),
        };
        let first = first.replace("~1", "/").replace("~0", "~");
        document.get(&first)?.pointer(&rest)
    } else {
        document.get(key)
    }
}

/// Parse a CLI value as JSON, falling back to a plain string
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
