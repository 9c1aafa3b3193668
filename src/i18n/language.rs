//! Language tag: validated, case-insensitive language identifier.
//!
//! Tags keep the spelling they were created with; equality, hashing and
//! [`LanguageTag::matches`] ignore ASCII case, so `"EN"` and `"en"` name the
//! same language.

use crate::i18n::LocalizationError;
use regex::Regex;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

/// A well-formed language tag such as `en`, `hr` or `pt-BR`.
#[derive(Debug, Clone)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Parse a language tag.
    ///
    /// Surrounding whitespace is ignored. The tag must be a primary subtag of
    /// 2-8 letters, optionally followed by `-`-separated alphanumeric subtags.
    ///
    /// # Example
    /// ```ignore
    /// let tag = LanguageTag::parse("hr-HR")?;
    /// assert_eq!(tag.primary(), "hr");
    /// ```
    pub fn parse(tag: &str) -> Result<Self, LocalizationError> {
        let regex = TAG_REGEX
            .get_or_init(|| Regex::new(r"^[A-Za-z]{2,8}(-[A-Za-z0-9]{1,8})*$").unwrap());

        let trimmed = tag.trim();
        if regex.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(LocalizationError::InvalidLanguageTag {
                tag: tag.to_string(),
            })
        }
    }

    /// The tag as it was written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`"hr"` for `"hr-HR"`).
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Whether `other` names this language, ignoring ASCII case.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl PartialEq for LanguageTag {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for LanguageTag {}

impl Hash for LanguageTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageTag {
    type Err = LocalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
