//! Change notification for board mutations.
//!
//! The board owns a list of payload-free callbacks and invokes every one of
//! them, in registration order, after each successful cell toggle. The
//! consumer (typically a UI layer re-rendering the board) subscribes with
//! [`Board::subscribe`] and drops out with [`Board::unsubscribe`].
//!
//! The registry is single-threaded: callbacks are `'static` but carry no
//! `Send`/`Sync` bounds, matching the board's single-session ownership model.
//!
//! [`Board::subscribe`]: crate::Board::subscribe
//! [`Board::unsubscribe`]: crate::Board::unsubscribe

use std::fmt;

/// Handle identifying a subscribed change listener.
///
/// Returned by [`Board::subscribe`] and consumed by [`Board::unsubscribe`].
///
/// [`Board::subscribe`]: crate::Board::subscribe
/// [`Board::unsubscribe`]: crate::Board::unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

/// Registry of change listeners owned by a board.
pub(crate) struct ChangeListeners {
    entries: Vec<(ListenerId, Box<dyn FnMut()>)>,
    next_id: usize,
}

impl ChangeListeners {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a callback and returns its handle.
    pub(crate) fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Removes a callback. Returns `false` if the handle was never registered
    /// or already removed.
    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Invokes every listener in registration order.
    pub(crate) fn notify(&mut self) {
        for (_, listener) in &mut self.entries {
            listener();
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("listeners", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn test_notify_calls_listeners_in_registration_order() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut listeners = ChangeListeners::new();

        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            listeners.subscribe(move || order.borrow_mut().push(tag));
        }
        listeners.notify();

        assert_eq!(*order.borrow(), ["first", "second", "third"]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let calls = Rc::new(Cell::new(0));
        let mut listeners = ChangeListeners::new();

        let counter = Rc::clone(&calls);
        let id = listeners.subscribe(move || counter.set(counter.get() + 1));

        listeners.notify();
        assert_eq!(calls.get(), 1);

        assert!(listeners.unsubscribe(id));
        listeners.notify();
        assert_eq!(calls.get(), 1);

        // A stale handle is a no-op.
        assert!(!listeners.unsubscribe(id));
    }

    #[test]
    fn test_handles_are_not_reused() {
        let mut listeners = ChangeListeners::new();
        let first = listeners.subscribe(|| {});
        assert!(listeners.unsubscribe(first));

        let second = listeners.subscribe(|| {});
        assert_ne!(first, second);
        assert_eq!(listeners.len(), 1);
    }
}
