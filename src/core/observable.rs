//! Observable value - single-threaded publish/subscribe store
//!
//! Holds the latest value, hands out clones on read, and notifies
//! subscribers synchronously (in registration order) after every write.
//! Subscriptions are RAII guards that unsubscribe on drop.
//!
//! Uses `Rc<RefCell<..>>` for shared single-threaded ownership; the whole
//! application runs on the event-processing thread, so nothing here is
//! `Send` or `Sync`.

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber = Rc<dyn Fn()>;

/// A shared value with change notification
pub struct Observable<T: Clone> {
    value: RefCell<T>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

/// RAII guard returned by [`Observable::subscribe`]
///
/// Dropping the guard removes the callback before the next notification
/// cycle.
pub struct Subscription {
    subscriber: Subscriber,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Clone of the latest value
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Replace the value and notify every subscriber
    ///
    /// Notification happens before this call returns; subscribers reading
    /// back through [`Observable::get`] always see the value just set.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
        self.notify();
    }

    /// Register a change callback; the returned guard unsubscribes on drop
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        let subscriber: Subscriber = Rc::new(callback);
        self.subscribers.borrow_mut().push(Rc::clone(&subscriber));
        Subscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify(&self) {
        // Clone the list so a callback that subscribes or unsubscribes does
        // not invalidate the iteration
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.subscribers
            .borrow_mut()
            .retain(|s| !Rc::ptr_eq(s, &self.subscriber));
    }
}
