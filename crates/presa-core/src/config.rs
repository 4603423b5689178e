//! Configuration loaded from `~/.config/presa/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

/// Modifier key names accepted in `[general] modifier`.
pub const MODIFIER_NAMES: &[&str] = &["command", "option", "control", "shift", "fn"];

/// Top-level configuration for Presa.
///
/// Missing sections fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Drag behavior settings.
    pub general: GeneralConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Drag behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// The key that must be held for a press to start a drag.
    /// One of: "command", "option", "control", "shift", "fn".
    pub modifier: String,
    /// Whether the engine starts enabled.
    pub enabled: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            modifier: "command".into(),
            enabled: true,
        }
    }
}

impl Config {
    /// Normalizes values to safe ones.
    ///
    /// Modifier names are lowercased; an unrecognized name falls back to
    /// "command" so a typo in the config never leaves the engine
    /// untriggerable.
    pub fn validate(&mut self) {
        self.general.modifier = self.general.modifier.to_ascii_lowercase();
        if !MODIFIER_NAMES.contains(&self.general.modifier.as_str()) {
            self.general.modifier = "command".into();
        }
    }
}

/// Returns the config directory: `~/.config/presa/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("presa"))
}

/// Returns the config file path: `~/.config/presa/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing what
/// went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// Non-existent files silently return defaults; other errors are
/// reported once on stderr.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(e) if is_file_not_found(&e) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Returns true if the error message indicates a missing file.
fn is_file_not_found(e: &str) -> bool {
    e.contains("No such file") || e.contains("cannot find")
}

/// The default config file written by `presa init`.
pub const TEMPLATE: &str = r#"# Presa configuration
# Hold the modifier and drag anywhere inside a window to move it.

[general]
# One of: command, option, control, shift, fn
modifier = "command"
# Whether dragging is active when the engine starts.
enabled = true

[logging]
# File logging to ~/.config/presa/logs/presa.log
enabled = false
# debug, info, warn, or error
level = "info"
# Rotate the log after this many megabytes (one backup kept).
max_file_mb = 10
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let mut config = Config::default();
        config.validate();

        assert_eq!(config.general.modifier, "command");
        assert!(config.general.enabled);
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_sections() {
        let config: Config = toml::from_str("[general]\nmodifier = \"option\"\n").unwrap();

        assert_eq!(config.general.modifier, "option");
        assert!(config.general.enabled);
        assert_eq!(config.logging.max_file_mb, 10);
    }

    #[test]
    fn validate_lowercases_modifier_names() {
        let mut config: Config = toml::from_str("[general]\nmodifier = \"Option\"\n").unwrap();
        config.validate();
        assert_eq!(config.general.modifier, "option");
    }

    #[test]
    fn unknown_modifier_falls_back_to_command() {
        let mut config: Config = toml::from_str("[general]\nmodifier = \"hyper\"\n").unwrap();
        config.validate();
        assert_eq!(config.general.modifier, "command");
    }

    #[test]
    fn template_parses_and_matches_defaults() {
        let mut config: Config = toml::from_str(TEMPLATE).unwrap();
        config.validate();

        assert_eq!(config.general.modifier, "command");
        assert!(config.general.enabled);
        assert!(!config.logging.enabled);
    }
}
