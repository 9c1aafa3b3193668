//! Runtime-switchable localization for UI elements.
//!
//! This module lets any number of UI elements display translated text and
//! follow language switches at runtime, without leaving listeners behind on
//! the global provider when elements come and go.
//!
//! # Architecture
//!
//! - `listener`: `Listener` handles and the `ListenerRegistry` every provider embeds
//! - `provider`: the `Provider` capability (lookups + listener subscription)
//! - `localization`: the root `LocalizationProvider` and its shared per-thread instance
//! - `bridge`: `LocalizationBridge`, a forwarding provider gated by lifecycle events
//! - `binding`: `LocalizedBinding`, pushing one key's text into one sink
//! - `widgets`: headless elements built from one binding each
//! - `table`: translation tables and the sources that load them
//! - `language`, `registry`, `strings`: language tags and the bundled languages
//! - `validator`, `metrics`: table checks and lookup/switch counters
//!
//! # Example
//!
//! ```rust,ignore
//! use live_localization::i18n::{Frame, LocalizationProvider, Menu};
//! use live_localization::i18n::strings::{APP_TITLE, FILE_MENU};
//!
//! let frame = Frame::new(APP_TITLE, LocalizationProvider::global()?);
//! let file = Menu::new(FILE_MENU, frame.provider());
//!
//! frame.open();
//! LocalizationProvider::global()?.set_language("hr")?;
//! assert_eq!(file.text(), "Datoteka");
//! ```

mod binding;
mod bridge;
mod error;
mod language;
mod listener;
mod localization;
mod metrics;
mod provider;
mod registry;
pub mod strings;
mod table;
mod validator;
mod widgets;

pub use binding::LocalizedBinding;
pub use bridge::{LifecycleEvent, LifecycleSignals, LocalizationBridge};
pub use error::{LocalizationError, LookupError};
pub use language::LanguageTag;
pub use listener::{Listener, ListenerRegistry};
pub use localization::{
    missing_key_placeholder, LocalizationProvider, DEFAULT_LANGUAGE, UNKNOWN_ENCODING,
};
pub use metrics::{LocalizationMetrics, MetricsReport};
pub use provider::Provider;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use table::{DirectoryTables, StaticTables, Table, TableSource};
pub use validator::{TableValidator, ValidationReport};
pub use widgets::{Action, FileChooser, Frame, Menu, TextProperty, ToolBar};
