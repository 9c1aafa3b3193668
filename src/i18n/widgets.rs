//! Headless localizable UI elements.
//!
//! Each element owns a [`TextProperty`] and a single [`LocalizedBinding`]
//! whose sink writes that property. A toolkit integration replaces the
//! property write with the toolkit's setter (`set_title`, `set_text`, ...).

use crate::i18n::{
    LifecycleEvent, LifecycleSignals, LocalizationBridge, LocalizedBinding, Provider,
};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A displayed string that localization bindings write into.
#[derive(Debug, Clone, Default)]
pub struct TextProperty(Rc<RefCell<String>>);

impl TextProperty {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> String {
        self.0.borrow().clone()
    }

    pub fn set(&self, text: String) {
        *self.0.borrow_mut() = text;
    }

    /// Bind this property to `key` on `provider`.
    pub fn bind(&self, key: &str, provider: Rc<dyn Provider>) -> LocalizedBinding {
        let property = self.clone();
        LocalizedBinding::new(key, provider, move |text| property.set(text))
    }
}

// ==================== Frame ====================

/// Top-level window.
///
/// Owns the [`LocalizationBridge`] its children bind to; opening and closing
/// the frame connects and disconnects that bridge.
#[derive(Debug)]
pub struct Frame {
    title: TextProperty,
    signals: LifecycleSignals,
    bridge: Rc<LocalizationBridge>,
    _binding: LocalizedBinding,
}

impl Frame {
    pub fn new(title_key: &str, parent: Rc<dyn Provider>) -> Self {
        let signals = LifecycleSignals::new();
        let bridge = LocalizationBridge::with_lifecycle(parent, &signals);
        let title = TextProperty::new();
        let binding = title.bind(title_key, bridge.clone());

        Self {
            title,
            signals,
            bridge,
            _binding: binding,
        }
    }

    /// Provider for elements placed in this frame.
    pub fn provider(&self) -> Rc<dyn Provider> {
        self.bridge.clone()
    }

    pub fn open(&self) {
        self.signals.emit(LifecycleEvent::Attached);
    }

    pub fn close(&self) {
        self.signals.emit(LifecycleEvent::Detached);
    }

    pub fn is_open(&self) -> bool {
        self.bridge.is_connected()
    }

    pub fn title(&self) -> String {
        self.title.get()
    }
}

// ==================== Menu ====================

#[derive(Debug)]
pub struct Menu {
    text: TextProperty,
    _binding: LocalizedBinding,
}

impl Menu {
    pub fn new(key: &str, provider: Rc<dyn Provider>) -> Self {
        let text = TextProperty::new();
        let binding = text.bind(key, provider);
        Self {
            text,
            _binding: binding,
        }
    }

    pub fn text(&self) -> String {
        self.text.get()
    }
}

// ==================== ToolBar ====================

#[derive(Debug)]
pub struct ToolBar {
    name: TextProperty,
    _binding: LocalizedBinding,
}

impl ToolBar {
    pub fn new(key: &str, provider: Rc<dyn Provider>) -> Self {
        let name = TextProperty::new();
        let binding = name.bind(key, provider);
        Self {
            name,
            _binding: binding,
        }
    }

    pub fn name(&self) -> String {
        self.name.get()
    }
}

// ==================== Action ====================

/// A triggerable command with a localized display name.
pub struct Action {
    name: TextProperty,
    handler: Box<dyn Fn()>,
    _binding: LocalizedBinding,
}

impl Action {
    pub fn new(key: &str, provider: Rc<dyn Provider>, handler: impl Fn() + 'static) -> Self {
        let name = TextProperty::new();
        let binding = name.bind(key, provider);
        Self {
            name,
            handler: Box::new(handler),
            _binding: binding,
        }
    }

    pub fn name(&self) -> String {
        self.name.get()
    }

    pub fn trigger(&self) {
        (self.handler)()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name.get())
            .finish_non_exhaustive()
    }
}

// ==================== FileChooser ====================

#[derive(Debug)]
pub struct FileChooser {
    dialog_title: TextProperty,
    _binding: LocalizedBinding,
}

impl FileChooser {
    pub fn new(key: &str, provider: Rc<dyn Provider>) -> Self {
        let dialog_title = TextProperty::new();
        let binding = dialog_title.bind(key, provider);
        Self {
            dialog_title,
            _binding: binding,
        }
    }

    pub fn dialog_title(&self) -> String {
        self.dialog_title.get()
    }
}
