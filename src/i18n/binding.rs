//! One-way binding from a localization key to a UI property.

use crate::i18n::{Listener, Provider};
use std::fmt;
use std::rc::Rc;

type Sink = Rc<dyn Fn(String)>;

/// Pushes the text for `key` into a sink now and after every change
/// notification from the provider.
///
/// The listener it registers stays registered for the provider's lifetime;
/// bind to a [`LocalizationBridge`](crate::i18n::LocalizationBridge) so that
/// the element's lifecycle, not the binding, decides when updates stop.
pub struct LocalizedBinding {
    key: String,
    provider: Rc<dyn Provider>,
    sink: Sink,
}

impl LocalizedBinding {
    /// Bind `key` on `provider` to `sink`.
    ///
    /// `sink` receives the current text before this returns.
    pub fn new(
        key: impl Into<String>,
        provider: Rc<dyn Provider>,
        sink: impl Fn(String) + 'static,
    ) -> Self {
        let key = key.into();
        let sink: Sink = Rc::new(sink);

        sink(provider.get_string(&key));

        let listener = {
            let provider = Rc::downgrade(&provider);
            let key = key.clone();
            let sink = Rc::clone(&sink);
            Listener::new(move || {
                if let Some(provider) = provider.upgrade() {
                    sink(provider.get_string(&key));
                }
            })
        };
        provider.add_listener(&listener);

        Self {
            key,
            provider,
            sink,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Push the current text again without waiting for a change.
    pub fn refresh(&self) {
        (self.sink)(self.provider.get_string(&self.key));
    }
}

impl fmt::Debug for LocalizedBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizedBinding")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LanguageTag, LocalizationBridge, LocalizationProvider, StaticTables, Table};
    use std::cell::RefCell;

    fn provider() -> Rc<LocalizationProvider> {
        let source = StaticTables::new()
            .with_table(
                LanguageTag::parse("en").unwrap(),
                Table::from_static(&[("greeting", "Hello"), ("title", "Notepad")]),
            )
            .with_table(
                LanguageTag::parse("hr").unwrap(),
                Table::from_static(&[("greeting", "Bok"), ("title", "Bilježnica")]),
            );
        Rc::new(LocalizationProvider::new(source, "en").unwrap())
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink_log = Rc::clone(&log);
        (log, move |text: String| sink_log.borrow_mut().push(text))
    }

    #[test]
    fn test_pushes_immediately_on_bind() {
        let (log, sink) = recorder();
        let _binding = LocalizedBinding::new("greeting", provider(), sink);
        assert_eq!(*log.borrow(), vec!["Hello"]);
    }

    #[test]
    fn test_repushes_on_change() {
        let provider = provider();
        let (log, sink) = recorder();
        let _binding = LocalizedBinding::new("greeting", provider.clone(), sink);

        provider.set_language("hr").unwrap();

        assert_eq!(*log.borrow(), vec!["Hello", "Bok"]);
    }

    #[test]
    fn test_missing_key_pushes_placeholder() {
        let (log, sink) = recorder();
        let _binding = LocalizedBinding::new("nope", provider(), sink);
        assert_eq!(*log.borrow(), vec!["?nope?"]);
    }

    #[test]
    fn test_same_language_does_not_repush() {
        let provider = provider();
        let (log, sink) = recorder();
        let _binding = LocalizedBinding::new("greeting", provider.clone(), sink);

        provider.set_language("EN").unwrap();

        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_refresh_repushes_current_text() {
        let provider = provider();
        let (log, sink) = recorder();
        let binding = LocalizedBinding::new("title", provider.clone(), sink);

        binding.refresh();

        assert_eq!(binding.key(), "title");
        assert_eq!(*log.borrow(), vec!["Notepad", "Notepad"]);
    }

    #[test]
    fn test_binding_survives_being_dropped() {
        let provider = provider();
        let (log, sink) = recorder();
        drop(LocalizedBinding::new("greeting", provider.clone(), sink));

        provider.set_language("hr").unwrap();

        assert_eq!(*log.borrow(), vec!["Hello", "Bok"]);
    }

    #[test]
    fn test_binding_through_bridge_follows_connection() {
        let provider = provider();
        let bridge = LocalizationBridge::new(provider.clone());
        let (log, sink) = recorder();
        let _binding = LocalizedBinding::new("greeting", bridge.clone(), sink);

        provider.set_language("hr").unwrap();
        assert_eq!(*log.borrow(), vec!["Hello"]);

        bridge.connect();
        provider.set_language("en").unwrap();
        assert_eq!(*log.borrow(), vec!["Hello", "Hello"]);
    }

    #[test]
    fn test_binding_does_not_keep_provider_alive() {
        let provider = provider();
        let bridge = LocalizationBridge::new(provider.clone());
        let weak = Rc::downgrade(&bridge);
        {
            let (_log, sink) = recorder();
            let _binding = LocalizedBinding::new("greeting", bridge.clone(), sink);
        }
        drop(bridge);
        assert!(weak.upgrade().is_none());
    }
}
