//! Change listeners and the registry every provider embeds.
//!
//! A [`ListenerRegistry`] keeps an ordered, de-duplicated set of
//! [`Listener`]s and fans out change notifications to them.
//!
//! # Re-entrancy
//!
//! `notify_all` iterates over a snapshot taken when the call starts. A
//! listener may add or remove listeners (including itself) while being
//! notified: additions take effect from the next notification, and a
//! listener removed mid-fan-out still receives the notification already in
//! progress.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// A change callback, compared by identity.
///
/// Cloning a `Listener` yields a handle to the same callback, so a clone can
/// be used to remove the original from a registry.
#[derive(Clone)]
pub struct Listener(Rc<dyn Fn()>);

impl Listener {
    /// Wrap a callback into a new listener with its own identity.
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self(Rc::new(callback))
    }

    /// Run the callback.
    pub fn invoke(&self) {
        (self.0)()
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener").field(&self.addr()).finish()
    }
}

/// Ordered set of listeners with synchronous fan-out.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    listeners: RefCell<Vec<Listener>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `listener` unless the same listener is already registered.
    pub fn add(&self, listener: &Listener) {
        let mut listeners = self.listeners.borrow_mut();
        if listeners.contains(listener) {
            trace!("Listener already registered, ignoring");
            return;
        }
        listeners.push(listener.clone());
    }

    /// Remove `listener` if present.
    pub fn remove(&self, listener: &Listener) {
        self.listeners.borrow_mut().retain(|l| l != listener);
    }

    pub fn contains(&self, listener: &Listener) -> bool {
        self.listeners.borrow().contains(listener)
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Invoke every registered listener in insertion order.
    ///
    /// Returns the number of listeners notified.
    pub fn notify_all(&self) -> usize {
        let snapshot: Vec<Listener> = self.listeners.borrow().clone();
        for listener in &snapshot {
            listener.invoke();
        }
        snapshot.len()
    }
}
