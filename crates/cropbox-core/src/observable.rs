//! A value that notifies listeners when it changes.
//!
//! Listeners run synchronously on the thread that calls [`Observable::set`],
//! once per call, in subscription order. Nothing is queued or deferred.

use std::fmt;

type Listener<T> = Box<dyn FnMut(&T)>;

pub struct Observable<T> {
    value: T,
    listeners: Vec<Listener<T>>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and notify every listener with it.
    pub fn set(&mut self, value: T) {
        self.value = value;
        for listener in &mut self.listeners {
            listener(&self.value);
        }
    }

    /// Register a listener. It is called right away with the current value.
    pub fn subscribe<F>(&mut self, mut listener: F)
    where
        F: FnMut(&T) + 'static,
    {
        listener(&self.value);
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T: Copy> Observable<T> {
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
