//! JSON config file management

pub mod defaults;
pub mod dir;
mod store;

pub use defaults::{BundledDefaults, DefaultSource, NoDefaults};
pub use dir::{init_config_dir, ConfigDir, CONFIG_FOLDER};
pub use store::ConfigStore;
