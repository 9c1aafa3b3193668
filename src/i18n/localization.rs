//! The root localization provider.
//!
//! [`LocalizationProvider`] owns the active language and its table, answers
//! lookups from that table, and notifies its listeners after every language
//! switch.
//!
//! # Global instance
//!
//! UI code reaches "the" provider through [`LocalizationProvider::global`].
//! The instance is thread-local (it is `!Send` because listeners are plain
//! closures): on the single UI thread it is the one shared provider, while any
//! other thread gets its own. It is created once, either lazily from the
//! built-in tables or explicitly through [`LocalizationProvider::install`].
//!
//! # Validation
//!
//! Every switch checks the new table against a reference table: the
//! canonical language's table from the same source, or the default
//! language's when the source has none. Keys that would render as `?key?`
//! are logged before the switch happens.

use crate::i18n::{
    LanguageRegistry, LanguageTag, Listener, ListenerRegistry, LocalizationError,
    LocalizationMetrics, LookupError, Provider, StaticTables, Table, TableSource, TableValidator,
};
use std::cell::{OnceCell, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Language the built-in provider starts with.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Returned by `get_string` when a stored value cannot be decoded.
pub const UNKNOWN_ENCODING: &str = "unknown encoding";

thread_local! {
    static GLOBAL: OnceCell<Rc<LocalizationProvider>> = const { OnceCell::new() };
}

/// Placeholder shown for a key the active table does not have.
pub fn missing_key_placeholder(key: &str) -> String {
    format!("?{key}?")
}

/// Language and table, always replaced together.
struct ActiveTable {
    language: LanguageTag,
    table: Table,
}

/// Root provider: active language, its table, and the listeners to notify
/// when they change.
pub struct LocalizationProvider {
    source: Box<dyn TableSource>,
    active: RefCell<ActiveTable>,
    reference: Table,
    listeners: ListenerRegistry,
}

impl LocalizationProvider {
    /// Create a provider and load `default_language` from `source`.
    ///
    /// # Errors
    /// `InvalidLanguageTag` for a malformed tag, `UnknownLanguage` when the
    /// source has no table for it.
    pub fn new(
        source: impl TableSource + 'static,
        default_language: &str,
    ) -> Result<Self, LocalizationError> {
        let language = LanguageTag::parse(default_language)?;
        let table = load(&source, &language)?;
        let reference = reference_table(&source, &language, &table);
        info!(language = %language, keys = table.len(), "Localization provider ready");

        Ok(Self {
            source: Box::new(source),
            active: RefCell::new(ActiveTable { language, table }),
            reference,
            listeners: ListenerRegistry::new(),
        })
    }

    /// Provider over the built-in tables, starting in [`DEFAULT_LANGUAGE`].
    pub fn builtin() -> Result<Self, LocalizationError> {
        Self::new(StaticTables::builtin(), DEFAULT_LANGUAGE)
    }

    /// The shared provider of the calling thread.
    ///
    /// Creates the built-in provider on first use unless one was installed.
    /// The instance is thread-local: in the single UI thread model it is the
    /// process-wide provider, but every other thread that calls this gets a
    /// separate one.
    ///
    /// # Errors
    /// Whatever [`builtin`](Self::builtin) reports when the lazy creation
    /// fails; a later call tries again.
    pub fn global() -> Result<Rc<LocalizationProvider>, LocalizationError> {
        GLOBAL.with(|cell| {
            if let Some(provider) = cell.get() {
                return Ok(Rc::clone(provider));
            }
            let provider = Rc::new(Self::builtin()?);
            Ok(Rc::clone(cell.get_or_init(|| provider)))
        })
    }

    /// Install `provider` as the shared provider of the calling thread.
    ///
    /// # Errors
    /// `AlreadyInitialized` if [`global`](Self::global) or `install` already
    /// ran on this thread.
    pub fn install(provider: LocalizationProvider) -> Result<Rc<Self>, LocalizationError> {
        let provider = Rc::new(provider);
        GLOBAL.with(|cell| {
            cell.set(Rc::clone(&provider))
                .map_err(|_| LocalizationError::AlreadyInitialized)
        })?;
        Ok(provider)
    }

    /// The active language, spelled as it was requested.
    pub fn current_language(&self) -> LanguageTag {
        self.active.borrow().language.clone()
    }

    /// The table every new table is validated against.
    pub fn reference_table(&self) -> &Table {
        &self.reference
    }

    /// Look up `key`, reporting why it could not be rendered.
    pub fn try_get_string(&self, key: &str) -> Result<String, LookupError> {
        self.active.borrow().table.get(key)
    }

    /// Switch to `language` and notify listeners.
    ///
    /// Reselecting the active language (ignoring ASCII case) does nothing.
    /// Listeners run after the new table is in place.
    ///
    /// # Errors
    /// `InvalidLanguageTag` or `UnknownLanguage`; the active language is
    /// unchanged and no listener runs.
    pub fn set_language(&self, language: &str) -> Result<(), LocalizationError> {
        if self.active.borrow().language.matches(language) {
            debug!(language, "Language already active, nothing to do");
            return Ok(());
        }

        let language = LanguageTag::parse(language)?;
        let table = load(self.source.as_ref(), &language)?;

        let report = TableValidator::validate(&self.reference, &table);
        if report.has_errors() {
            warn!(
                language = %language,
                errors = ?report.errors,
                "Table lacks keys of the reference table"
            );
        }

        {
            let mut active = self.active.borrow_mut();
            info!(from = %active.language, to = %language, "Switching language");
            *active = ActiveTable { language, table };
        }

        let metrics = LocalizationMetrics::global();
        metrics.record_language_switch();
        let notified = self.listeners.notify_all();
        metrics.record_notifications(notified);
        debug!(listeners = notified, "Language change propagated");

        Ok(())
    }

    /// Switch to the language after the active one in `languages`, wrapping
    /// around. Starts at the first entry when the active language is not
    /// listed. An empty list does nothing.
    pub fn cycle_language(&self, languages: &[&str]) -> Result<(), LocalizationError> {
        if languages.is_empty() {
            return Ok(());
        }

        let next = {
            let active = self.active.borrow();
            languages
                .iter()
                .position(|lang| active.language.matches(lang))
                .map(|pos| (pos + 1) % languages.len())
                .unwrap_or(0)
        };

        self.set_language(languages[next])
    }

    /// Number of listeners currently registered directly on this provider.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Provider for LocalizationProvider {
    fn get_string(&self, key: &str) -> String {
        let metrics = LocalizationMetrics::global();
        metrics.record_lookup();

        match self.try_get_string(key) {
            Ok(text) => text,
            Err(LookupError::MissingKey(_)) => {
                metrics.record_missing_key();
                warn!(key, language = %self.active.borrow().language, "Missing translation");
                missing_key_placeholder(key)
            }
            Err(LookupError::Decoding { .. }) => {
                metrics.record_decoding_failure();
                warn!(key, language = %self.active.borrow().language, "Undecodable translation");
                UNKNOWN_ENCODING.to_string()
            }
        }
    }

    fn add_listener(&self, listener: &Listener) {
        self.listeners.add(listener);
    }

    fn remove_listener(&self, listener: &Listener) {
        self.listeners.remove(listener);
    }
}

impl fmt::Debug for LocalizationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizationProvider")
            .field("language", &self.active.borrow().language)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// The canonical language's table from `source`, falling back to the
/// default language's table.
fn reference_table(source: &dyn TableSource, default: &LanguageTag, default_table: &Table) -> Table {
    LanguageRegistry::get()
        .canonical()
        .and_then(|config| LanguageTag::parse(config.code).ok())
        .filter(|canonical| canonical != default)
        .and_then(|canonical| source.load_table(&canonical))
        .unwrap_or_else(|| default_table.clone())
}

fn load(source: &dyn TableSource, language: &LanguageTag) -> Result<Table, LocalizationError> {
    source
        .load_table(language)
        .ok_or_else(|| LocalizationError::UnknownLanguage {
            tag: language.to_string(),
        })
}
