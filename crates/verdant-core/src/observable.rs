#![forbid(unsafe_code)]

//! Single-owner observable state.
//!
//! Ambient UI flags (dark mode, scroll position, menu-open) each have one
//! owner and many read-only subscribers. `Observable<T>` makes that
//! relationship explicit: the owner mutates through `set`/`update`, readers
//! either poll with `get`/`with` or register a callback.
//!
//! Everything is synchronous and single-threaded: callbacks run inline on
//! the owner's call to `set`, in registration order. This mirrors a
//! cooperative UI event loop; there are no locks in the contract.

/// Identifier handed out by [`Observable::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

/// A single-owner observable value.
pub struct Observable<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T> Observable<T> {
    /// Create an observable holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            next_id: 1,
            subscribers: Vec::new(),
        }
    }

    /// Borrow the current value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value)
    }

    /// Replace the value and notify subscribers in registration order.
    pub fn set(&mut self, value: T) {
        self.value = value;
        for (_, cb) in &mut self.subscribers {
            cb(&self.value);
        }
    }

    /// Mutate the value in place, then notify subscribers.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        for (_, cb) in &mut self.subscribers {
            cb(&self.value);
        }
    }

    /// Register a callback invoked on every subsequent `set`/`update`.
    ///
    /// The callback is NOT invoked with the current value at registration;
    /// poll with [`Observable::with`] first if the initial state matters.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Clone> Observable<T> {
    /// Clone out the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.clone()
    }
}
