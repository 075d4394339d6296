//! Document-level pointer-down listener registry.
//!
//! A [`Registration`] is the scoped claim on one listener slot: creating it
//! attaches the handler and dropping it detaches, so every exit path
//! (unmount, reconfiguration, unwinding) releases the listener.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handler invoked for each dispatched event.
pub type Handler<E> = Rc<dyn Fn(&E)>;

/// Identifier of one attached listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Allocates a process-wide unique identifier.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identifier.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A place where document-level pointer-down listeners are attached.
///
/// Implementations are cheap handles (`Clone` shares the same registry).
pub trait DocumentListeners: Clone {
    /// Event type delivered to handlers.
    type Event;

    /// Attaches a handler and returns its identifier.
    fn add(&self, handler: Handler<Self::Event>) -> ListenerId;

    /// Detaches a handler. Returns false if it was not attached.
    fn remove(&self, id: ListenerId) -> bool;
}

/// Scoped listener attachment, detached on drop.
pub struct Registration<D: DocumentListeners> {
    document: D,
    id: ListenerId,
}

impl<D: DocumentListeners> Registration<D> {
    /// Attaches `handler` to `document`.
    pub fn attach(document: &D, handler: Handler<D::Event>) -> Self {
        let id = document.add(handler);
        tracing::debug!(listener = %id, "Attached pointer-down listener");
        Self {
            document: document.clone(),
            id,
        }
    }

    /// Returns the listener identifier.
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<D: DocumentListeners> Drop for Registration<D> {
    fn drop(&mut self) {
        if self.document.remove(self.id) {
            tracing::debug!(listener = %self.id, "Detached pointer-down listener");
        }
    }
}

impl<D: DocumentListeners> fmt::Debug for Registration<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration").field("id", &self.id).finish()
    }
}

/// In-process listener registry.
///
/// Dispatch runs handlers in attachment order. A handler removed while a
/// dispatch is in progress is skipped if it has not run yet.
pub struct MemoryDocument<E> {
    listeners: Rc<RefCell<Vec<(ListenerId, Handler<E>)>>>,
}

impl<E> MemoryDocument<E> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Number of attached listeners.
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Returns true if no listeners are attached.
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Returns true if `id` is attached.
    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners.borrow().iter().any(|(l, _)| *l == id)
    }

    /// Delivers `event` to every attached listener, returning how many ran.
    pub fn dispatch(&self, event: &E) -> usize {
        let snapshot: Vec<_> = self.listeners.borrow().clone();
        let mut delivered = 0;
        for (id, handler) in snapshot {
            if self.contains(id) {
                handler(event);
                delivered += 1;
            }
        }
        delivered
    }
}

impl<E> Clone for MemoryDocument<E> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<E> Default for MemoryDocument<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> DocumentListeners for MemoryDocument<E> {
    type Event = E;

    fn add(&self, handler: Handler<E>) -> ListenerId {
        let id = ListenerId::next();
        self.listeners.borrow_mut().push((id, handler));
        id
    }

    fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(l, _)| *l != id);
        listeners.len() != before
    }
}
