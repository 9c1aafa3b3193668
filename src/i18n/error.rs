//! Error types for the localization layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to callers of the localization layer.
///
/// Lookup problems never show up here: `get_string` is total and recovers
/// from them locally (see [`LookupError`]).
#[derive(Debug, Error)]
pub enum LocalizationError {
    /// The table source has no table for the requested language.
    #[error("no translation table for language '{tag}'")]
    UnknownLanguage { tag: String },

    /// The tag is not a well-formed language tag.
    #[error("invalid language tag: '{tag}'")]
    InvalidLanguageTag { tag: String },

    /// The process-wide provider was installed after it already existed.
    #[error("global localization provider is already initialized")]
    AlreadyInitialized,

    #[error("failed to read translation table {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse translation table {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Why a single key could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The key is absent from the current table.
    #[error("missing key '{0}'")]
    MissingKey(String),

    /// The stored value is not valid UTF-8.
    #[error("value for key '{key}' is not valid UTF-8")]
    Decoding { key: String },
}
