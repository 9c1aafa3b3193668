//! Translation tables and the sources that supply them.
//!
//! A [`Table`] maps keys to raw bytes. Values are decoded as UTF-8 at lookup
//! time so that a corrupt entry only affects the key it belongs to.
//!
//! A [`TableSource`] answers "give me the table for this language" and is the
//! only way the provider obtains tables. Two sources ship with the crate:
//!
//! - [`StaticTables`]: in-memory tables, including the built-in set
//! - [`DirectoryTables`]: `<tag>.json` / `<tag>.properties` files on disk

use crate::i18n::{LanguageRegistry, LanguageTag, LocalizationError, LookupError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key to text mapping for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    entries: HashMap<String, Vec<u8>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Decode the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<String, LookupError> {
        let bytes = self
            .entries
            .get(key)
            .ok_or_else(|| LookupError::MissingKey(key.to_string()))?;

        String::from_utf8(bytes.clone()).map_err(|_| LookupError::Decoding {
            key: key.to_string(),
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Build a table from a built-in `(key, text)` slice.
    pub fn from_static(entries: &[(&str, &str)]) -> Self {
        entries.iter().copied().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Table
where
    K: Into<String>,
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Table::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

/// Supplier of translation tables.
///
/// `None` means the source has no table for the language.
pub trait TableSource {
    fn load_table(&self, language: &LanguageTag) -> Option<Table>;
}

// ==================== Static Tables ====================

/// In-memory tables keyed by language tag (case-insensitive).
#[derive(Debug, Clone, Default)]
pub struct StaticTables {
    tables: HashMap<LanguageTag, Table>,
}

impl StaticTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables for every enabled language in the [`LanguageRegistry`].
    pub fn builtin() -> Self {
        let mut tables = Self::new();
        for config in LanguageRegistry::get().list_enabled() {
            match LanguageTag::parse(config.code) {
                Ok(tag) => tables.insert(tag, Table::from_static(config.table)),
                Err(e) => warn!(code = config.code, error = %e, "Skipping bundled language"),
            }
        }
        tables
    }

    pub fn insert(&mut self, language: LanguageTag, table: Table) {
        self.tables.insert(language, table);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_table(mut self, language: LanguageTag, table: Table) -> Self {
        self.insert(language, table);
        self
    }
}

impl TableSource for StaticTables {
    fn load_table(&self, language: &LanguageTag) -> Option<Table> {
        self.tables.get(language).cloned()
    }
}

// ==================== Directory Tables ====================

/// Tables read from a directory of `<tag>.json` or `<tag>.properties` files.
///
/// File stems are matched against the tag ignoring ASCII case. When no file
/// exists for the full tag, the primary subtag is tried (`hr-HR` falls back
/// to `hr`).
#[derive(Debug, Clone)]
pub struct DirectoryTables {
    dir: PathBuf,
}

impl DirectoryTables {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load the table for `language`, reporting I/O and parse failures.
    ///
    /// Returns `Ok(None)` when no file exists for the tag or its primary
    /// subtag.
    pub fn try_load(&self, language: &LanguageTag) -> Result<Option<Table>, LocalizationError> {
        let mut candidates = vec![language.as_str()];
        if !language.primary().eq_ignore_ascii_case(language.as_str()) {
            candidates.push(language.primary());
        }

        for candidate in candidates {
            if let Some(path) = self.find_file(candidate)? {
                debug!(path = %path.display(), language = %language, "Loading translation table");
                return read_table(&path).map(Some);
            }
        }

        Ok(None)
    }

    fn find_file(&self, stem: &str) -> Result<Option<PathBuf>, LocalizationError> {
        let entries = fs::read_dir(&self.dir).map_err(|source| LocalizationError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut found: Option<PathBuf> = None;
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    warn!(dir = %self.dir.display(), error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };
            let matches_stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.eq_ignore_ascii_case(stem))
                .unwrap_or(false);
            if !matches_stem {
                continue;
            }
            match TableFormat::from_path(&path) {
                // JSON wins when both formats exist.
                Some(TableFormat::Json) => return Ok(Some(path)),
                Some(TableFormat::Properties) => found = Some(path),
                None => {}
            }
        }

        Ok(found)
    }
}

impl TableSource for DirectoryTables {
    fn load_table(&self, language: &LanguageTag) -> Option<Table> {
        match self.try_load(language) {
            Ok(table) => table,
            Err(e) => {
                warn!(language = %language, error = %e, "Failed to load translation table");
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableFormat {
    Json,
    Properties,
}

impl TableFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("properties") {
            Some(Self::Properties)
        } else {
            None
        }
    }
}

fn read_table(path: &Path) -> Result<Table, LocalizationError> {
    let bytes = fs::read(path).map_err(|source| LocalizationError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match TableFormat::from_path(path) {
        Some(TableFormat::Json) => parse_json(path, &bytes),
        Some(TableFormat::Properties) => parse_properties(path, &bytes),
        None => Err(LocalizationError::Parse {
            path: path.to_path_buf(),
            message: "unsupported table format".to_string(),
        }),
    }
}

/// Parse a flat JSON object of string values.
fn parse_json(path: &Path, bytes: &[u8]) -> Result<Table, LocalizationError> {
    let entries: HashMap<String, String> =
        serde_json::from_slice(bytes).map_err(|e| LocalizationError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(entries.into_iter().collect())
}

/// Parse a `.properties` resource bundle.
///
/// `#` and `!` start comment lines. The key ends at the first unescaped `=`,
/// `:` or whitespace; a line with only a key has an empty value. A line
/// ending in an odd number of backslashes continues on the next line, whose
/// leading whitespace is dropped. `\t`, `\n`, `\r`, `\f` and `\uXXXX`
/// escapes are decoded and any other escaped character stands for itself.
/// Everything else is kept as raw bytes; keys must be UTF-8.
fn parse_properties(path: &Path, bytes: &[u8]) -> Result<Table, LocalizationError> {
    let mut table = Table::new();
    let mut lines = bytes.split(|b| *b == b'\n').enumerate();

    while let Some((index, raw_line)) = lines.next() {
        let line = strip_cr(raw_line).trim_ascii_start();
        if line.is_empty() || line[0] == b'#' || line[0] == b'!' {
            continue;
        }

        let parse_error = |message: String| LocalizationError::Parse {
            path: path.to_path_buf(),
            message: format!("line {}: {message}", index + 1),
        };

        let mut logical = line.to_vec();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.extend_from_slice(strip_cr(next).trim_ascii_start()),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        let key = String::from_utf8(unescape(key).map_err(&parse_error)?)
            .map_err(|_| parse_error("key is not valid UTF-8".to_string()))?;
        if key.is_empty() {
            return Err(parse_error("empty key".to_string()));
        }

        table.insert(key, unescape(value).map_err(&parse_error)?);
    }

    Ok(table)
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn ends_with_continuation(line: &[u8]) -> bool {
    line.iter().rev().take_while(|b| **b == b'\\').count() % 2 == 1
}

/// Split a logical line into its still-escaped key and value.
fn split_entry(line: &[u8]) -> (&[u8], &[u8]) {
    let mut end = 0;
    while end < line.len() {
        match line[end] {
            b'\\' => end += 2,
            b'=' | b':' | b' ' | b'\t' | b'\x0c' => break,
            _ => end += 1,
        }
    }
    let end = end.min(line.len());

    let mut value = line[end..].trim_ascii_start();
    if let Some((&separator, rest)) = value.split_first() {
        if separator == b'=' || separator == b':' {
            value = rest.trim_ascii_start();
        }
    }

    (&line[..end], value)
}

fn unescape(raw: &[u8]) -> Result<Vec<u8>, String> {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        if raw[i] != b'\\' {
            out.push(raw[i]);
            i += 1;
            continue;
        }

        // A lone trailing backslash is dropped.
        let Some(&escaped) = raw.get(i + 1) else {
            break;
        };
        i += 2;

        match escaped {
            b't' => out.push(b'\t'),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b'f' => out.push(b'\x0c'),
            b'u' => {
                let (ch, used) = decode_unicode_escape(&raw[i..])?;
                i += used;
                let mut buf = [0u8; 4];
                out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

/// Decode the hex digits after `\u`, joining a UTF-16 surrogate pair written
/// as two escapes. Returns the character and the number of bytes consumed.
fn decode_unicode_escape(rest: &[u8]) -> Result<(char, usize), String> {
    let high = hex_unit(rest).ok_or("malformed \\uXXXX escape")?;
    if let Some(ch) = char::from_u32(u32::from(high)) {
        return Ok((ch, 4));
    }

    let low = match rest.get(4..6) {
        Some(b"\\u") => hex_unit(&rest[6..]),
        _ => None,
    };
    match low.and_then(|low| char::decode_utf16([high, low]).next()) {
        Some(Ok(ch)) => Ok((ch, 10)),
        _ => Err("unpaired surrogate in \\u escape".to_string()),
    }
}

fn hex_unit(digits: &[u8]) -> Option<u16> {
    let digits = digits.get(..4)?;
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    u16::from_str_radix(std::str::from_utf8(digits).ok()?, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tag(s: &str) -> LanguageTag {
        LanguageTag::parse(s).unwrap()
    }

    // ==================== Table Tests ====================

    #[test]
    fn test_get_existing_key() {
        let table = Table::from_static(&[("greeting", "Hello")]);
        assert_eq!(table.get("greeting"), Ok("Hello".to_string()));
    }

    #[test]
    fn test_get_missing_key() {
        let table = Table::new();
        assert_eq!(
            table.get("nope"),
            Err(LookupError::MissingKey("nope".to_string()))
        );
    }

    #[test]
    fn test_get_invalid_utf8() {
        let mut table = Table::new();
        table.insert("broken", vec![0xff, 0xfe, 0x41]);
        assert_eq!(
            table.get("broken"),
            Err(LookupError::Decoding {
                key: "broken".to_string()
            })
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = Table::new();
        table.insert("k", "one");
        table.insert("k", "two");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("k").unwrap(), "two");
    }

    // ==================== Static Source Tests ====================

    #[test]
    fn test_static_lookup_ignores_case() {
        let source = StaticTables::new().with_table(tag("en"), Table::from_static(&[("k", "v")]));
        assert!(source.load_table(&tag("EN")).is_some());
        assert!(source.load_table(&tag("hr")).is_none());
    }

    #[test]
    fn test_builtin_has_enabled_languages() {
        let source = StaticTables::builtin();
        let en = source.load_table(&tag("en")).unwrap();
        let hr = source.load_table(&tag("hr")).unwrap();
        assert_eq!(en.get("greeting").unwrap(), "Hello");
        assert_eq!(hr.get("greeting").unwrap(), "Bok");
    }

    // ==================== Directory Source Tests ====================

    #[test]
    fn test_directory_loads_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.json"), r#"{"greeting": "Hello"}"#).unwrap();

        let table = DirectoryTables::new(dir.path()).load_table(&tag("en")).unwrap();
        assert_eq!(table.get("greeting").unwrap(), "Hello");
    }

    #[test]
    fn test_directory_loads_properties() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("hr.properties"),
            "# comment\n! also a comment\ngreeting = Bok\r\nfarewell: Doviđenja\nempty\n",
        )
        .unwrap();

        let table = DirectoryTables::new(dir.path()).load_table(&tag("hr")).unwrap();
        assert_eq!(table.get("greeting").unwrap(), "Bok");
        assert_eq!(table.get("farewell").unwrap(), "Doviđenja");
        assert_eq!(table.get("empty").unwrap(), "");
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_properties_keep_undecodable_values() {
        let dir = TempDir::new().unwrap();
        let mut content = b"ok=fine\nbad=".to_vec();
        content.extend_from_slice(&[0xc0, 0xaf]);
        fs::write(dir.path().join("en.properties"), content).unwrap();

        let table = DirectoryTables::new(dir.path()).load_table(&tag("en")).unwrap();
        assert_eq!(table.get("ok").unwrap(), "fine");
        assert!(matches!(table.get("bad"), Err(LookupError::Decoding { .. })));
    }

    #[test]
    fn test_directory_matches_stem_case_insensitively() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("EN.json"), r#"{"k": "v"}"#).unwrap();

        assert!(DirectoryTables::new(dir.path()).load_table(&tag("en")).is_some());
    }

    #[test]
    fn test_directory_falls_back_to_primary_subtag() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hr.json"), r#"{"greeting": "Bok"}"#).unwrap();

        let table = DirectoryTables::new(dir.path())
            .load_table(&tag("hr-HR"))
            .unwrap();
        assert_eq!(table.get("greeting").unwrap(), "Bok");
    }

    #[test]
    fn test_directory_prefers_full_tag() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pt.json"), r#"{"k": "pt"}"#).unwrap();
        fs::write(dir.path().join("pt-BR.json"), r#"{"k": "pt-BR"}"#).unwrap();

        let table = DirectoryTables::new(dir.path())
            .load_table(&tag("pt-BR"))
            .unwrap();
        assert_eq!(table.get("k").unwrap(), "pt-BR");
    }

    #[test]
    fn test_directory_missing_language() {
        let dir = TempDir::new().unwrap();
        let source = DirectoryTables::new(dir.path());
        assert!(source.try_load(&tag("de")).unwrap().is_none());
        assert!(source.load_table(&tag("de")).is_none());
    }

    #[test]
    fn test_directory_invalid_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.json"), "[1, 2, 3]").unwrap();

        let source = DirectoryTables::new(dir.path());
        assert!(matches!(
            source.try_load(&tag("en")),
            Err(LocalizationError::Parse { .. })
        ));
        assert!(source.load_table(&tag("en")).is_none());
    }

    #[test]
    fn test_directory_missing_dir_is_io_error() {
        let dir = TempDir::new().unwrap();
        let source = DirectoryTables::new(dir.path().join("does-not-exist"));
        assert!(matches!(
            source.try_load(&tag("en")),
            Err(LocalizationError::Io { .. })
        ));
    }

    #[test]
    fn test_properties_empty_key_is_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.properties"), "=value\n").unwrap();

        assert!(matches!(
            DirectoryTables::new(dir.path()).try_load(&tag("en")),
            Err(LocalizationError::Parse { .. })
        ));
    }

    // ==================== Properties Syntax Tests ====================

    fn properties(content: &str) -> Result<Table, LocalizationError> {
        parse_properties(Path::new("test.properties"), content.as_bytes())
    }

    #[test]
    fn test_properties_unicode_escape() {
        let table = properties(r"farewell=Dovi\u0111enja").unwrap();
        assert_eq!(table.get("farewell").unwrap(), "Doviđenja");
    }

    #[test]
    fn test_properties_surrogate_pair_escape() {
        let table = properties(r"smile=\uD83D\uDE00").unwrap();
        assert_eq!(table.get("smile").unwrap(), "\u{1F600}");
    }

    #[test]
    fn test_properties_bad_unicode_escapes() {
        assert!(matches!(
            properties(r"short=\u12"),
            Err(LocalizationError::Parse { .. })
        ));
        assert!(matches!(
            properties(r"lonely=\uD83D"),
            Err(LocalizationError::Parse { .. })
        ));
    }

    #[test]
    fn test_properties_whitespace_separator() {
        let table = properties("greeting Bok\ntabbed\tvalue\nspaced   =   out\n").unwrap();
        assert_eq!(table.get("greeting").unwrap(), "Bok");
        assert_eq!(table.get("tabbed").unwrap(), "value");
        assert_eq!(table.get("spaced").unwrap(), "out");
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_properties_line_continuation() {
        let table = properties("long=first \\\n    second\nnext=1\n").unwrap();
        assert_eq!(table.get("long").unwrap(), "first second");
        assert_eq!(table.get("next").unwrap(), "1");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_properties_escaped_backslash_does_not_continue() {
        let table = properties("dir=C:\\\\\nnext=1\n").unwrap();
        assert_eq!(table.get("dir").unwrap(), "C:\\");
        assert_eq!(table.get("next").unwrap(), "1");
    }

    #[test]
    fn test_properties_character_escapes() {
        let table = properties(r"key\=with\:sep\ space = line\nbreak\ttab\\slash").unwrap();
        assert_eq!(
            table.get("key=with:sep space").unwrap(),
            "line\nbreak\ttab\\slash"
        );
    }

    #[test]
    fn test_directory_properties_bundle() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("hr.properties"),
            "farewell=Dovi\\u0111enja\ngreeting Bok\nlong=first \\\n    second\n",
        )
        .unwrap();

        let table = DirectoryTables::new(dir.path()).load_table(&tag("hr")).unwrap();
        assert_eq!(table.get("farewell").unwrap(), "Doviđenja");
        assert_eq!(table.get("greeting").unwrap(), "Bok");
        assert_eq!(table.get("long").unwrap(), "first second");

        let mut keys: Vec<&str> = table.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["farewell", "greeting", "long"]);
    }

    #[test]
    fn test_directory_ignores_other_extensions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.txt"), "greeting=Hello").unwrap();

        assert!(DirectoryTables::new(dir.path()).load_table(&tag("en")).is_none());
    }
}
