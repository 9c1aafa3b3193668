//! The capability shared by every source of localized text.

use crate::i18n::Listener;

/// Answers `get_string` lookups and notifies listeners when the answers
/// change.
///
/// Implemented by the root [`LocalizationProvider`](crate::i18n::LocalizationProvider)
/// and by the forwarding [`LocalizationBridge`](crate::i18n::LocalizationBridge).
pub trait Provider {
    /// Text for `key` in the active language.
    ///
    /// Never fails: unresolvable keys yield a displayable placeholder.
    fn get_string(&self, key: &str) -> String;

    /// Register `listener`; registering the same listener again is a no-op.
    fn add_listener(&self, listener: &Listener);

    /// Unregister `listener`; unknown listeners are ignored.
    fn remove_listener(&self, listener: &Listener);
}
