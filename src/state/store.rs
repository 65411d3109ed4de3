use std::fmt;

/// Handle returned by [`Store::subscribe()`] for later unsubscription
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SubscriptionId(u64);

/// A container for the latest value of some piece of UI state.
///
/// Observers can either register a callback with [`Store::subscribe()`],
/// which is invoked synchronously after every change, or poll
/// [`Store::revision()`] and compare it against the last revision they saw.
pub struct Store<T> {
    value: T,
    revision: u64,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
}

impl<T> Store<T> {
    pub fn new(value: T) -> Store<T> {
        Store {
            value,
            revision: 0,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of changes made since the store was created
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Modify the value in place and notify subscribers
    pub fn update<R, F>(&mut self, func: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let r = func(&mut self.value);
        self.revision = self.revision.wrapping_add(1);
        self.notify();
        r
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        for (_, callback) in &mut self.subscribers {
            callback(&self.value);
        }
    }
}

impl<T: PartialEq> Store<T> {
    /// Replace the value.  Nothing happens if the new value equals the
    /// current one.
    pub fn set(&mut self, value: T) {
        if self.value != value {
            self.update(|v| *v = value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.value)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_update_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new(1);
        let sink = Rc::clone(&seen);
        store.subscribe(move |&v| sink.borrow_mut().push(v));
        let r = store.update(|v| {
            *v += 1;
            "done"
        });
        assert_eq!(r, "done");
        store.set(5);
        assert_eq!(*store.get(), 5);
        assert_eq!(store.revision(), 2);
        assert_eq!(*seen.borrow(), vec![2, 5]);
    }

    #[test]
    fn test_set_same_value_is_silent() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = Store::new("a");
        let sink = Rc::clone(&calls);
        store.subscribe(move |_| *sink.borrow_mut() += 1);
        store.set("a");
        assert_eq!(store.revision(), 0);
        assert_eq!(*calls.borrow(), 0);
        store.set("b");
        assert_eq!(store.revision(), 1);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new(0);
        let sink = Rc::clone(&seen);
        let first = store.subscribe(move |&v| sink.borrow_mut().push(("first", v)));
        let sink = Rc::clone(&seen);
        store.subscribe(move |&v| sink.borrow_mut().push(("second", v)));
        assert_eq!(store.subscriber_count(), 2);
        store.set(1);
        assert!(store.unsubscribe(first));
        assert!(!store.unsubscribe(first));
        store.set(2);
        assert_eq!(
            *seen.borrow(),
            vec![("first", 1), ("second", 1), ("second", 2)]
        );
    }

    #[test]
    fn test_debug() {
        let mut store = Store::new(42);
        store.subscribe(|_| ());
        assert_eq!(
            format!("{store:?}"),
            "Store { value: 42, revision: 0, subscribers: 1, .. }"
        );
    }
}
