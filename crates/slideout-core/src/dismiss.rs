//! Click-outside dismissal binding.
//!
//! [`OutsideClick`] keeps at most one document listener per panel instance,
//! keyed by the identity of the close callback. Re-syncing with the same key
//! is a no-op; a new key detaches the old listener before attaching the
//! replacement; disabling or dropping the binding detaches it.

use std::rc::Rc;

use crate::click::{should_dismiss, PointerDown};
use crate::listener::{DocumentListeners, Handler, ListenerId, Registration};

/// Builds the pointer-down handler for one panel.
///
/// `locate` reports whether the event target is inside the panel, or `None`
/// if the panel is not mounted. `on_close` runs once per dismissing event.
pub fn dismiss_handler<E, L, C>(locate: L, on_close: C) -> Handler<E>
where
    E: PointerDown + 'static,
    L: Fn(&E) -> Option<bool> + 'static,
    C: Fn() + 'static,
{
    Rc::new(move |event: &E| {
        if should_dismiss(event, locate(event)) {
            on_close();
        }
    })
}

/// Outside-click listener slot of a single panel.
pub struct OutsideClick<D: DocumentListeners, K> {
    document: D,
    active: Option<(K, Registration<D>)>,
}

impl<D: DocumentListeners, K: PartialEq> OutsideClick<D, K> {
    /// Creates an inactive binding on `document`.
    pub fn new(document: D) -> Self {
        Self {
            document,
            active: None,
        }
    }

    /// Brings the listener in line with `enabled` and the callback `key`.
    ///
    /// `make_handler` is only called when a new listener must be attached.
    /// Returns true if the attached listener changed.
    pub fn sync<F>(&mut self, enabled: bool, key: K, make_handler: F) -> bool
    where
        F: FnOnce() -> Handler<D::Event>,
    {
        if !enabled {
            return self.release();
        }

        if matches!(&self.active, Some((current, _)) if *current == key) {
            return false;
        }

        // Old listener goes first so two are never attached at once.
        self.active = None;
        let registration = Registration::attach(&self.document, make_handler());
        self.active = Some((key, registration));
        true
    }

    /// Detaches the listener. Returns true if one was attached.
    pub fn release(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Returns true while a listener is attached.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Identifier of the attached listener.
    pub fn listener_id(&self) -> Option<ListenerId> {
        self.active.as_ref().map(|(_, registration)| registration.id())
    }

    /// The document this binding attaches to.
    pub fn document(&self) -> &D {
        &self.document
    }
}
