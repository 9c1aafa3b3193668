//! Lifecycle-gated forwarding provider.
//!
//! A [`LocalizationBridge`] sits between a long-lived parent provider and a
//! UI element whose visible lifetime is shorter. Lookups always go straight
//! to the parent. Change notifications only flow while the bridge is
//! connected, and the bridge holds a registration on the parent only while
//! connected, so closed elements leave nothing behind on the parent.
//!
//! The windowing layer drives the connection through [`LifecycleEvent`]s,
//! delivered by a [`LifecycleSignals`] source.

use crate::i18n::{Listener, ListenerRegistry, Provider};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Liveness signal from the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The element became live (e.g. its window was opened).
    Attached,
    /// The element stopped being live (e.g. its window was closed).
    Detached,
}

type LifecycleHandler = Rc<dyn Fn(LifecycleEvent)>;

/// Source of [`LifecycleEvent`]s for one UI element.
///
/// Handlers run synchronously, in subscription order, over a snapshot taken
/// when [`emit`](Self::emit) starts.
#[derive(Default)]
pub struct LifecycleSignals {
    handlers: RefCell<Vec<LifecycleHandler>>,
}

impl LifecycleSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl Fn(LifecycleEvent) + 'static) {
        self.handlers.borrow_mut().push(Rc::new(handler));
    }

    pub fn emit(&self, event: LifecycleEvent) {
        let snapshot: Vec<LifecycleHandler> = self.handlers.borrow().clone();
        for handler in &snapshot {
            handler(event);
        }
    }
}

impl fmt::Debug for LifecycleSignals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleSignals")
            .field("handlers", &self.handlers.borrow().len())
            .finish()
    }
}

/// Forwarding provider whose subscription to its parent follows the
/// connected state.
///
/// States are `Disconnected` (initial) and `Connected`. [`connect`](Self::connect)
/// registers a single forwarding listener on the parent, [`disconnect`](Self::disconnect)
/// removes it; calling either in the state it leads to does nothing.
pub struct LocalizationBridge {
    parent: Rc<dyn Provider>,
    connected: Cell<bool>,
    listeners: Rc<ListenerRegistry>,
    forwarding: Listener,
}

impl LocalizationBridge {
    /// Create a disconnected bridge over `parent`.
    pub fn new(parent: Rc<dyn Provider>) -> Rc<Self> {
        let listeners = Rc::new(ListenerRegistry::new());
        let forwarding = {
            let listeners = Rc::downgrade(&listeners);
            Listener::new(move || {
                if let Some(listeners) = listeners.upgrade() {
                    listeners.notify_all();
                }
            })
        };

        Rc::new(Self {
            parent,
            connected: Cell::new(false),
            listeners,
            forwarding,
        })
    }

    /// Create a bridge driven by `signals`.
    pub fn with_lifecycle(parent: Rc<dyn Provider>, signals: &LifecycleSignals) -> Rc<Self> {
        let bridge = Self::new(parent);
        bridge.attach_to(signals);
        bridge
    }

    /// Connect on [`LifecycleEvent::Attached`] and disconnect on
    /// [`LifecycleEvent::Detached`] from `signals`.
    ///
    /// The subscription does not keep the bridge alive.
    pub fn attach_to(self: &Rc<Self>, signals: &LifecycleSignals) {
        let bridge = Rc::downgrade(self);
        signals.subscribe(move |event| {
            if let Some(bridge) = bridge.upgrade() {
                bridge.handle(event);
            }
        });
    }

    pub fn handle(&self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::Attached => self.connect(),
            LifecycleEvent::Detached => self.disconnect(),
        }
    }

    /// Subscribe to the parent. No-op when already connected.
    pub fn connect(&self) {
        if self.connected.get() {
            return;
        }
        self.connected.set(true);
        self.parent.add_listener(&self.forwarding);
        debug!(listeners = self.listeners.len(), "Localization bridge connected");
    }

    /// Unsubscribe from the parent. No-op when already disconnected.
    pub fn disconnect(&self) {
        if !self.connected.get() {
            return;
        }
        self.connected.set(false);
        self.parent.remove_listener(&self.forwarding);
        debug!(listeners = self.listeners.len(), "Localization bridge disconnected");
    }

    pub fn is_connected(&self) -> bool {
        self.connected.get()
    }

    /// Number of listeners registered on this bridge.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Provider for LocalizationBridge {
    fn get_string(&self, key: &str) -> String {
        self.parent.get_string(key)
    }

    fn add_listener(&self, listener: &Listener) {
        self.listeners.add(listener);
    }

    fn remove_listener(&self, listener: &Listener) {
        self.listeners.remove(listener);
    }
}

impl Drop for LocalizationBridge {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl fmt::Debug for LocalizationBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizationBridge")
            .field("connected", &self.connected.get())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
