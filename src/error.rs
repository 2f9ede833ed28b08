//! Error types for the pieces around the calculator core.
//!
//! The engine itself never fails; these cover reading keys, loading the
//! config file and talking to the clipboard.

use std::path::PathBuf;
use thiserror::Error;

/// A key sequence could not be turned into intents.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("'{0}' is not a digit or decimal point")]
    InvalidDigit(char),

    #[error("'{0}' is not a known operation")]
    InvalidOperation(String),

    #[error("unknown key '{key}' at position {position}")]
    UnknownKey { key: char, position: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),

    #[error("failed to copy to clipboard: {0}")]
    Copy(#[source] arboard::Error),
}
