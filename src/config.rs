//! Configuration file support
//!
//! Loads settings from ~/.brace-outlines.toml (or
//! %USERPROFILE%\.brace-outlines.toml on Windows)
//!
//! Example:
//! ```text
//! # brace-outlines configuration
//! match-only-if-caret-on-brace = true
//! exclude-quoted = false
//! color = "Yellow"
//! thickness = 1.0
//! ```

use std::fs;
use std::path::PathBuf;

use toml::Table;

use crate::error::{EngineError, Result};
use crate::style::Color;

/// Engine and presentation settings
///
/// Fixed at engine construction; there is no runtime reload.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Only highlight when the caret is directly on or next to a delimiter
    pub match_only_if_caret_on_brace: bool,
    /// Treat delimiters inside an open quote run as plain text
    ///
    /// Off by default: the quote check still runs for every delimiter
    /// candidate, but its result does not suppress delimiter status.
    /// Turning this on changes which pairs get highlighted near
    /// unbalanced quotes.
    pub exclude_quoted: bool,
    /// Outline color, passed through to the host renderer
    pub color: Color,
    /// Outline thickness in device units, passed through to the host renderer
    pub thickness: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            match_only_if_caret_on_brace: true,
            exclude_quoted: false,
            color: Color::Yellow,
            thickness: 1.0,
        }
    }
}

impl Settings {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".brace-outlines.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".brace-outlines.toml"))
        }
    }

    /// Load settings from the config file
    ///
    /// A missing or malformed file yields the defaults.
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                match Self::from_toml(&contents) {
                    Ok(settings) => return settings,
                    Err(e) => log::debug!("ignoring config file {}: {}", path.display(), e),
                }
            }
        }
        Settings::default()
    }

    /// Parse settings from TOML text
    ///
    /// Keys not present keep their default values.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut settings = Settings::default();

        if let Some(value) = table.get("match-only-if-caret-on-brace") {
            settings.match_only_if_caret_on_brace = value
                .as_bool()
                .ok_or_else(|| bad_value("match-only-if-caret-on-brace", "expected a boolean"))?;
        }

        if let Some(value) = table.get("exclude-quoted") {
            settings.exclude_quoted = value
                .as_bool()
                .ok_or_else(|| bad_value("exclude-quoted", "expected a boolean"))?;
        }

        if let Some(value) = table.get("color") {
            let name = value
                .as_str()
                .ok_or_else(|| bad_value("color", "expected a string"))?;
            settings.color = Color::from_name(name)
                .ok_or_else(|| EngineError::UnknownColor(name.to_string()))?;
        }

        if let Some(value) = table.get("thickness") {
            let thickness = value
                .as_float()
                .or_else(|| value.as_integer().map(|n| n as f64))
                .ok_or_else(|| bad_value("thickness", "expected a number"))?;
            settings.thickness = thickness.clamp(0.5, 8.0);
        }

        Ok(settings)
    }

    /// Save current settings to the config file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            let contents = format!(
                "# brace-outlines configuration\n\
                 # Generated automatically\n\n\
                 match-only-if-caret-on-brace = {}\n\
                 exclude-quoted = {}\n\
                 color = \"{}\"\n\
                 thickness = {:.1}\n",
                self.match_only_if_caret_on_brace,
                self.exclude_quoted,
                self.color.name(),
                self.thickness
            );
            fs::write(path, contents)?;
        }
        Ok(())
    }
}

fn bad_value(key: &str, message: &str) -> EngineError {
    EngineError::Config {
        key: key.to_string(),
        message: message.to_string(),
    }
}
