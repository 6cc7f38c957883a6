//! Picker configuration loading.
//!
//! Initial picker properties come from a small JSON document stored in the
//! standard configuration directory (`~/.config/tintband/picker.json` on most
//! platforms), optionally overridden by environment variables. The file is
//! only ever read; nothing here writes it back.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tintband_types::ColorValue;
use tracing::{debug, warn};

use crate::{expand_tilde, is_truthy};

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "TINTBAND_CONFIG_PATH";

/// Environment variable overriding the initially selected color.
pub const COLOR_ENV: &str = "TINTBAND_COLOR";

/// Environment variable overriding the display mode.
pub const SHOW_AS_TEXT_ENV: &str = "TINTBAND_SHOW_AS_TEXT";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "picker.json";

/// Error surfaced when reading the configuration fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure other than a missing file.
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The payload could not be serialized.
    #[error("config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Properties applied to the picker before it is attached.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Color shown when the picker first appears.
    pub selected_color: Option<ColorValue>,
    /// Whether the text area (instead of the button) displays the color.
    pub show_as_text: bool,
}

impl PickerConfig {
    /// Load configuration from `path` (or the default location) and apply
    /// environment overrides on top.
    ///
    /// A missing file yields defaults. A file that cannot be parsed is logged
    /// and ignored.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
        let mut config = load_payload(&resolved)?;
        config.apply_env_overrides();
        debug!(path = %resolved.display(), ?config, "Loaded picker configuration");
        Ok(config)
    }

    /// Overlay `TINTBAND_COLOR` and `TINTBAND_SHOW_AS_TEXT` when present.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(color) = env::var(COLOR_ENV) {
            let trimmed = color.trim();
            self.selected_color = if trimmed.is_empty() { None } else { Some(ColorValue::new(trimmed)) };
        }
        if let Ok(flag) = env::var(SHOW_AS_TEXT_ENV) {
            self.show_as_text = is_truthy(&flag);
        }
    }

    /// Render the configuration as pretty JSON, e.g. for `--print-config`.
    pub fn to_pretty_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Location of the configuration file when no explicit path is given.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tintband")
        .join(CONFIG_FILE_NAME)
}

fn load_payload(path: &Path) -> Result<PickerConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse picker config; using defaults"
                );
                Ok(PickerConfig::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PickerConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
