//! Configuration module for blogsift
//!
//! Manages the posts file location, timing of the interactive behaviour,
//! highlight settings and keybinds. Configuration is stored in the user's
//! config directory and can be overridden with `BLOGSIFT_*` environment
//! variables (nested keys use `__`, e.g. `BLOGSIFT_TIMING__DEBOUNCE_MS`).

use crate::comments::FormSettings;
use crate::keybinds::{KeybindConfig, KeybindMap};
use crate::search::SessionSettings;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Posts file used when neither the CLI nor the config names one
pub const DEFAULT_POSTS_FILE: &str = "posts.toml";

/// Timers of the page behaviour, in milliseconds
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// Quiet period before typed input is searched
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Simulated comment posting delay
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// How long the "comment posted" message stays up
    #[serde(default = "default_success_message_ms")]
    pub success_message_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            submit_delay_ms: default_submit_delay_ms(),
            success_message_ms: default_success_message_ms(),
        }
    }
}

/// Search behaviour
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Queries this many characters long or shorter are not highlighted
    #[serde(default = "default_highlight_min_len")]
    pub highlight_min_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            highlight_min_len: default_highlight_min_len(),
        }
    }
}

const fn default_debounce_ms() -> u64 {
    300
}

const fn default_submit_delay_ms() -> u64 {
    1000
}

const fn default_success_message_ms() -> u64 {
    3000
}

const fn default_highlight_min_len() -> usize {
    crate::search::highlight::DEFAULT_MIN_HIGHLIGHT_LEN
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct BlogConfig {
    /// Posts file to load when `--posts` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_file: Option<PathBuf>,

    /// Page URL used for share links, overriding the posts file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub search: SearchConfig,

    /// Keybind overrides; unlisted actions keep their defaults
    #[serde(default)]
    pub keybinds: KeybindConfig,
}

impl BlogConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("blogsift").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            tracing::info!(path = %config_path.display(), "created default config");
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file plus the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(
                Environment::with_prefix("BLOGSIFT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        fs::write(config_path, self.to_toml()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Serialize to pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Posts file to load: the CLI flag, then the config, then `posts.toml`
    #[must_use]
    pub fn posts_path(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.posts_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_POSTS_FILE))
    }

    #[must_use]
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            debounce: Duration::from_millis(self.timing.debounce_ms),
            min_highlight_len: self.search.highlight_min_len,
        }
    }

    #[must_use]
    pub fn form_settings(&self) -> FormSettings {
        FormSettings {
            submit_delay: Duration::from_millis(self.timing.submit_delay_ms),
            success_ttl: Duration::from_millis(self.timing.success_message_ms),
        }
    }

    /// Parsed keybinds, with defaults for actions not overridden
    #[must_use]
    pub fn keymap(&self) -> KeybindMap {
        self.keybinds.clone().merged_with_defaults().keymap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybinds::PageAction;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_default_config() {
        let config = BlogConfig::default();
        assert!(config.posts_file.is_none());
        assert!(!config.quiet);
        assert_eq!(config.timing.debounce_ms, 300);
        assert_eq!(config.timing.submit_delay_ms, 1000);
        assert_eq!(config.timing.success_message_ms, 3000);
        assert_eq!(config.search.highlight_min_len, 2);
    }

    #[test]
    fn test_settings_conversion() {
        let config = BlogConfig::default();
        assert_eq!(config.session_settings(), SessionSettings::default());
        assert_eq!(config.form_settings(), FormSettings::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: BlogConfig = toml::from_str(
            r#"
            posts_file = "content/posts.json"

            [timing]
            debounce_ms = 150
        "#,
        )
        .unwrap();

        assert_eq!(config.posts_file, Some(PathBuf::from("content/posts.json")));
        assert_eq!(config.timing.debounce_ms, 150);
        assert_eq!(config.timing.submit_delay_ms, 1000);
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn test_posts_path_precedence() {
        let mut config = BlogConfig::default();
        assert_eq!(config.posts_path(None), PathBuf::from("posts.toml"));

        config.posts_file = Some(PathBuf::from("from-config.toml"));
        assert_eq!(config.posts_path(None), PathBuf::from("from-config.toml"));
        assert_eq!(
            config.posts_path(Some(Path::new("from-cli.json"))),
            PathBuf::from("from-cli.json")
        );
    }

    #[test]
    fn test_keybind_overrides_merge() {
        let config: BlogConfig = toml::from_str(
            r#"
            [keybinds]
            share = "ctrl-x"
        "#,
        )
        .unwrap();
        let map = config.keymap();

        assert_eq!(
            map.get(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            Some(&PageAction::Share)
        );
        assert_eq!(
            map.get(&KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL)),
            Some(&PageAction::FocusSearch)
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let config = BlogConfig {
            site_url: Some("https://example.com/".to_string()),
            ..Default::default()
        };
        let parsed: BlogConfig = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
