//! Configuration loaded from TOML.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermfolioError};

/// Language of every user-visible string the session produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Es => f.write_str("es"),
        }
    }
}

/// Top-level termfolio configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermfolioConfig {
    /// Message catalog and command descriptions.
    #[serde(default)]
    pub locale: Locale,
    /// Prefix of the echo line appended for every command.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Title shown in the window header.
    #[serde(default = "default_window_title")]
    pub window_title: String,
    /// Whether the Spanish command aliases are accepted.
    #[serde(default = "yes")]
    pub spanish_aliases: bool,
}

fn default_prompt() -> String {
    "$ ".to_string()
}
fn default_window_title() -> String {
    "terminal-portfolio".to_string()
}
fn yes() -> bool {
    true
}

impl Default for TermfolioConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            prompt: default_prompt(),
            window_title: default_window_title(),
            spanish_aliases: true,
        }
    }
}

impl TermfolioConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&source)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.prompt.is_empty() {
            return Err(TermfolioError::Config("prompt must not be empty".into()));
        }
        Ok(())
    }
}
