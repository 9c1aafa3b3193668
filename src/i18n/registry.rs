//! Language registry: the languages that ship with built-in tables.
//!
//! This module provides a centralized registry of bundled languages. It uses a
//! singleton pattern with `OnceLock` to ensure thread-safe initialization and
//! access.

use crate::i18n::strings::{CROATIAN_TABLE, ENGLISH_TABLE};
use std::sync::OnceLock;

/// Configuration for a bundled language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Language tag (e.g., "en", "hr")
    pub code: &'static str,

    /// Whether this is the canonical language other tables are checked against
    pub is_canonical: bool,

    /// Whether this language is offered at runtime
    pub enabled: bool,

    /// Built-in `(key, text)` table
    pub table: &'static [(&'static str, &'static str)],
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Codes of the enabled languages, in registry order.
    pub fn enabled_codes(&self) -> Vec<&'static str> {
        self.list_enabled().iter().map(|lang| lang.code).collect()
    }

    /// The canonical language every other table is checked against.
    pub fn canonical(&self) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.is_canonical)
    }
}

/// Bundled languages: English (canonical) and Croatian.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            is_canonical: true,
            enabled: true,
            table: ENGLISH_TABLE,
        },
        LanguageConfig {
            code: "hr",
            is_canonical: false,
            enabled: true,
            table: CROATIAN_TABLE,
        },
    ]
}
