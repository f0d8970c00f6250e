//! Single-slot observable value storage

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct Slot<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(usize, Subscriber<T>)>>,
    next_id: RefCell<usize>,
}

/// Handle returned by [`ValueCell::subscribe`], used to unsubscribe again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// Observable cell holding a field's canonical value.
///
/// Clones share the same slot. Subscribers run synchronously after every
/// write and receive a snapshot, so they may read the cell (or write other
/// cells) while being notified.
pub struct ValueCell<T> {
    slot: Rc<Slot<T>>,
}

impl<T: Clone> ValueCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(Slot {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                next_id: RefCell::new(0),
            }),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.slot.value.borrow().clone()
    }

    /// Run `f` against the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.slot.value.borrow())
    }

    /// Store `value` and notify every subscriber
    pub fn set(&self, value: T) {
        *self.slot.value.borrow_mut() = value;

        let subscribers: Vec<Subscriber<T>> = self
            .slot
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();
        if subscribers.is_empty() {
            return;
        }

        let snapshot = self.get();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }

    /// Register a callback invoked after each write
    pub fn subscribe(&self, subscriber: impl Fn(&T) + 'static) -> SubscriptionId {
        let mut next_id = self.slot.next_id.borrow_mut();
        let id = *next_id;
        *next_id += 1;
        self.slot
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(subscriber)));
        SubscriptionId(id)
    }

    /// Remove a callback; returns whether it was still registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.slot.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id.0);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.slot.subscribers.borrow().len()
    }

    /// Non-owning handle to the same slot
    pub fn downgrade(&self) -> WeakCell<T> {
        WeakCell {
            slot: Rc::downgrade(&self.slot),
        }
    }
}

impl<T> Clone for ValueCell<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: Default + Clone> Default for ValueCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueCell")
            .field("value", &*self.slot.value.borrow())
            .field("subscribers", &self.slot.subscribers.borrow().len())
            .finish()
    }
}

/// Weak counterpart of [`ValueCell`]; never keeps the slot alive
pub struct WeakCell<T> {
    slot: Weak<Slot<T>>,
}

impl<T: Clone> WeakCell<T> {
    /// Current value, or `None` once the owning cell is gone
    pub fn get(&self) -> Option<T> {
        self.slot.upgrade().map(|slot| slot.value.borrow().clone())
    }

    /// Run `f` against the current value, or `None` once the cell is gone
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.slot.upgrade().map(|slot| f(&slot.value.borrow()))
    }

    pub fn is_alive(&self) -> bool {
        self.slot.strong_count() > 0
    }
}

impl<T> Clone for WeakCell<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Weak::clone(&self.slot),
        }
    }
}

impl<T> fmt::Debug for WeakCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakCell")
            .field("alive", &(self.slot.strong_count() > 0))
            .finish()
    }
}
