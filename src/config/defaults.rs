//! Bundled default config content

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::HashMap;

/// Source of default content for newly created config files, keyed by file name
/// (`<name>.json`)
pub trait DefaultSource {
    fn lookup(&self, file_name: &str) -> Option<Cow<'static, [u8]>>;
}

/// Defaults compiled into the binary from the `defaults/` folder
#[derive(RustEmbed)]
#[folder = "defaults/"]
struct Assets;

#[derive(Debug, Clone, Copy, Default)]
pub struct BundledDefaults;

impl BundledDefaults {
    /// Config names that have a bundled default, sorted
    pub fn names() -> Vec<String> {
        let mut names: Vec<String> = Assets::iter()
            .filter_map(|file| file.strip_suffix(".json").map(str::to_string))
            .collect();
        names.sort();
        names
    }

    pub fn contains(name: &str) -> bool {
        Assets::get(&super::dir::file_name(name)).is_some()
    }
}

impl DefaultSource for BundledDefaults {
    fn lookup(&self, file_name: &str) -> Option<Cow<'static, [u8]>> {
        Assets::get(file_name).map(|file| file.data)
    }
}

/// No defaults at all; every new file starts empty
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefaults;

impl DefaultSource for NoDefaults {
    fn lookup(&self, _file_name: &str) -> Option<Cow<'static, [u8]>> {
        None
    }
}

impl DefaultSource for HashMap<String, Vec<u8>> {
    fn lookup(&self, file_name: &str) -> Option<Cow<'static, [u8]>> {
        self.get(file_name).map(|data| Cow::Owned(data.clone()))
    }
}
