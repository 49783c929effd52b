//! cfgstore - Named JSON configuration files
//!
//! Each config lives at `config/<name>.json` under the working directory. A
//! new file can be seeded from a default bundled into the binary, and the
//! document is loaded, edited in place and saved explicitly.

pub mod cli;
pub mod config;
pub mod error;

pub use config::ConfigStore;
pub use error::Error;
