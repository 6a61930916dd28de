//! Configuration file support
//!
//! Loads settings from ~/.codepad.conf (or %USERPROFILE%\.codepad.conf
//! on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # codepad configuration
//! default-language = python
//! line-numbers = true
//! dark-mode = true
//! store-path = /home/user/scripts.toml
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::highlight::LanguageId;

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Language used when none can be detected
    pub default_language: LanguageId,
    /// Whether to emit the line-number gutter
    pub show_line_numbers: bool,
    /// Whether the terminal preview uses the dark palette
    pub dark_mode: bool,
    /// Script store file, default location when None
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: LanguageId::Python,
            show_line_numbers: false,
            dark_mode: false,
            store_path: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".codepad.conf"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".codepad.conf"))
        }
    }

    /// Load configuration from file
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                let settings = Self::parse(&contents);
                config.apply(&settings);
            }
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key = value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(value) = settings.get("default-language") {
            self.default_language = LanguageId::from_name(value);
        }

        if let Some(value) = settings.get("line-numbers") {
            self.show_line_numbers = parse_bool(value);
        }

        if let Some(value) = settings.get("dark-mode") {
            self.dark_mode = parse_bool(value);
        }

        if let Some(value) = settings.get("store-path") {
            if !value.is_empty() {
                self.store_path = Some(PathBuf::from(value));
            }
        }
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> bool {
    let s = s.to_lowercase();
    matches!(s.as_str(), "true" | "yes" | "on" | "1")
}
