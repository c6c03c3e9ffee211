//! Glint content configuration.
//!
//! The lists the content-population collaborator renders (skill bubbles,
//! skill bars, logo marquee entries) come from a `glint.toml` file loaded
//! once at startup into an immutable value. There is no process-wide
//! mutable configuration; callers pass the loaded value down explicitly.
//!
//! A missing file yields the built-in defaults so a bare checkout still
//! runs; a file that exists but fails to parse is surfaced as an error,
//! since silently ignoring a file the user wrote hides real mistakes.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from loading the content configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One skill entry: a bubble in the skills cloud and a proficiency bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntry {
    /// Name shown next to the bubble and bar.
    pub display_name: String,
    /// Image asset name for the bubble icon.
    pub image_asset: String,
    /// Bar fill percentage, 0-100.
    pub proficiency_percent: u8,
}

impl Default for SkillEntry {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            image_asset: String::new(),
            proficiency_percent: 0,
        }
    }
}

/// One logo-marquee entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoEntry {
    pub display_name: String,
    pub image_asset: String,
}

impl Default for LogoEntry {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            image_asset: String::new(),
        }
    }
}

/// Immutable startup content configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// Skill bubbles and bars, in display order.
    pub skills: Vec<SkillEntry>,
    /// Logo marquee entries, in display order.
    pub logos: Vec<LogoEntry>,
}

impl ContentConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Load configuration from a file.
    ///
    /// A missing file is not an error: the defaults are returned and a log
    /// line notes the fallback. Any other I/O failure, or a parse failure,
    /// is surfaced.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}
