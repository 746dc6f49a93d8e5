//! Outbound notifications.
//!
//! Managers publish what happened through an `EventBus`; a presentation layer
//! either registers callbacks or captures an `EventQueue` and drains it after
//! each command. Emission is synchronous and in order.
//!
//! ```
//! use pocket_games::core::EventBus;
//!
//! let mut bus = EventBus::new();
//! let queue = bus.capture();
//!
//! bus.emit(&"turn started");
//! bus.emit(&"turn ended");
//!
//! assert_eq!(queue.drain(), vec!["turn started", "turn ended"]);
//! assert!(queue.is_empty());
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Handle returned by `EventBus::subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u32);

impl ListenerId {
    /// Create a new listener ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

type Listener<E> = Box<dyn FnMut(&E)>;

/// Synchronous observer registry.
///
/// Listeners run in subscription order on the emitting thread.
pub struct EventBus<E> {
    listeners: Vec<(ListenerId, Listener<E>)>,
    next_id: u32,
}

impl<E> EventBus<E> {
    /// Create a bus with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a listener. It receives every event emitted from now on.
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every listener.
    pub fn emit(&mut self, event: &E) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<E: Clone + 'static> EventBus<E> {
    /// Subscribe a buffering queue and return it.
    pub fn capture(&mut self) -> EventQueue<E> {
        let queue = EventQueue::default();
        let sink = queue.clone();
        self.subscribe(move |event: &E| sink.push(event.clone()));
        queue
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Buffered events waiting to be consumed, oldest first.
///
/// Clones share the same buffer.
#[derive(Debug)]
pub struct EventQueue<E> {
    events: Rc<RefCell<VecDeque<E>>>,
}

impl<E> EventQueue<E> {
    fn push(&self, event: E) {
        self.events.borrow_mut().push_back(event);
    }

    /// Take every buffered event.
    pub fn drain(&self) -> Vec<E> {
        self.events.borrow_mut().drain(..).collect()
    }

    /// Take the oldest buffered event.
    pub fn pop(&self) -> Option<E> {
        self.events.borrow_mut().pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl<E> Clone for EventQueue<E> {
    fn clone(&self) -> Self {
        Self {
            events: Rc::clone(&self.events),
        }
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self {
            events: Rc::new(RefCell::new(VecDeque::new())),
        }
    }
}
