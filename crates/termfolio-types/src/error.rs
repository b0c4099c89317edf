//! Error types for termfolio.

use std::io;

/// Errors produced by termfolio.
///
/// The interpreter and the window lifecycle never fail; these variants
/// cover configuration loading and custom registry construction.
#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("registry error: {0}")]
    Registry(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermfolioError>;
