//! Configuration and small helpers shared by the tintband crates.

pub mod config;
mod path_processing;

pub use config::{ConfigError, PickerConfig, default_config_path};
pub use path_processing::{expand_tilde, is_truthy};
