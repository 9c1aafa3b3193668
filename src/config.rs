use crate::i18n::{LanguageRegistry, LanguageTag, DEFAULT_LANGUAGE};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Language the provider starts in
    pub default_language: String,

    /// Directory of `<tag>.json` / `<tag>.properties` tables; built-in tables when unset
    pub tables_dir: Option<PathBuf>,

    /// Languages the demo cycles through; every bundled language when unset
    pub demo_languages: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let default_language = lookup("LOCALE_DEFAULT_LANGUAGE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        LanguageTag::parse(&default_language)
            .context("LOCALE_DEFAULT_LANGUAGE is not a valid language tag")?;

        let tables_dir = lookup("LOCALE_TABLES_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let demo_languages = match lookup("LOCALE_DEMO_LANGUAGES") {
            Some(list) => parse_language_list(&list)
                .context("LOCALE_DEMO_LANGUAGES contains an invalid language tag")?,
            None => LanguageRegistry::get()
                .enabled_codes()
                .into_iter()
                .map(String::from)
                .collect(),
        };

        Ok(Self {
            default_language,
            tables_dir,
            demo_languages,
        })
    }
}

fn parse_language_list(list: &str) -> Result<Vec<String>> {
    list.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| {
            LanguageTag::parse(code)
                .map(|tag| tag.to_string())
                .with_context(|| format!("invalid language tag '{code}'"))
        })
        .collect()
}
